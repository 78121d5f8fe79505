pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod orchestrator;
pub mod result;
pub mod stage_trait;
pub mod stages;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::RunConfig;
pub use context::PipelineContext;
pub use error::PipelineError;
pub use layout::ProjectLayout;
pub use orchestrator::PipelineController;
pub use result::{PackageArtifact, PipelineReport, StageOutcome, StageRecord, StageResult, StageStatus};
pub use stage_trait::PipelineStage;
pub use state::PipelineState;

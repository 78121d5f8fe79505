use crate::fs::is_populated;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use async_trait::async_trait;
use tracing::debug;

/// Both third-party source directories must be checked out before anything runs.
pub struct PrecheckStage;

#[async_trait]
impl PipelineStage for PrecheckStage {
    fn state(&self) -> PipelineState {
        PipelineState::Precheck
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let missing: Vec<_> = context
            .layout
            .dependency_dirs
            .iter()
            .filter(|dir| !is_populated(dir))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(PipelineError::MissingDependency { missing });
        }

        for dir in &context.layout.dependency_dirs {
            debug!(path = %dir.display(), "Dependency present");
        }

        Ok(StageOutcome::Completed(
            "External dependencies present".to_string(),
        ))
    }
}

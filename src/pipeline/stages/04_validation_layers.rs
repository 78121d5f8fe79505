use crate::fs::copy_matching;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::layout::LAYER_EXTENSION;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use async_trait::async_trait;
use tracing::{debug, info};

/// Copies the prebuilt validation layers next to the native libraries.
///
/// Only one ABI is staged. An empty or missing layer source copies nothing
/// and is not reported as a problem.
pub struct ValidationLayerStage;

#[async_trait]
impl PipelineStage for ValidationLayerStage {
    fn state(&self) -> PipelineState {
        PipelineState::ValidationStage
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let layout = &context.layout;
        info!("Validation enabled, copying validation layers...");

        let copied = copy_matching(&layout.layer_source, &layout.layer_dest, LAYER_EXTENSION)
            .map_err(|e| PipelineError::ValidationStaging(format!("{:#}", e)))?;

        if copied.is_empty() {
            debug!(source = %layout.layer_source.display(), "No validation layers found");
        }
        for file in &copied {
            info!("\t{}", file.display());
        }

        Ok(StageOutcome::Completed(format!(
            "Staged {} validation layer(s) into {}",
            copied.len(),
            layout.layer_dest.display()
        )))
    }
}

use crate::fs::{copy_tree, remove_tree};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use async_trait::async_trait;
use tracing::debug;

/// Replaces the project's `assets/` with a fresh copy of the shared data tree.
///
/// Anything edited inside `assets/` is lost on every run.
pub struct AssetStage;

#[async_trait]
impl PipelineStage for AssetStage {
    fn state(&self) -> PipelineState {
        PipelineState::Assets
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let layout = &context.layout;

        let removed = remove_tree(&layout.asset_dest)
            .map_err(|e| PipelineError::AssetStaging(format!("{:#}", e)))?;
        if removed {
            debug!(path = %layout.asset_dest.display(), "Removed previous assets");
        }

        let files = copy_tree(&layout.asset_source, &layout.asset_dest)
            .map_err(|e| PipelineError::AssetStaging(format!("{:#}", e)))?;

        Ok(StageOutcome::Completed(format!(
            "Copied {} asset file(s) from {}",
            files,
            layout.asset_source.display()
        )))
    }
}

use crate::fs::move_replace;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::{PackageArtifact, StageOutcome};
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use async_trait::async_trait;
use std::fs;

/// Moves the package into the shared output directory, replacing an older copy.
pub struct RelocateStage;

#[async_trait]
impl PipelineStage for RelocateStage {
    fn state(&self) -> PipelineState {
        PipelineState::Relocate
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let output_dir = context.layout.output_dir.clone();
        fs::create_dir_all(&output_dir).map_err(|e| {
            PipelineError::Relocation(format!("creating {}: {}", output_dir.display(), e))
        })?;

        let source = context
            .artifact
            .as_ref()
            .map(|a| a.path.clone())
            .unwrap_or_else(|| context.layout.package_file.clone());
        let destination = context.layout.artifact_destination();

        move_replace(&source, &destination)
            .map_err(|e| PipelineError::Relocation(format!("{:#}", e)))?;

        context.artifact = Some(PackageArtifact::new(&destination));
        Ok(StageOutcome::Completed(format!(
            "Moved package to {}",
            destination.display()
        )))
    }
}

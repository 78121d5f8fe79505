use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::{PackageArtifact, StageOutcome};
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use crate::tools::ToolKind;
use async_trait::async_trait;

/// Runs `ant debug` with a fixed output file name and records the artifact.
pub struct PackageStage;

#[async_trait]
impl PipelineStage for PackageStage {
    fn state(&self) -> PipelineState {
        PipelineState::Package
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let file_name = context.config.package_file_name();
        let invocation = context
            .invocation(ToolKind::Packager)
            .args(["debug".to_string(), format!("-Dout.final.file={}", file_name)]);

        let exit = context
            .run_tool(&invocation)
            .await
            .map_err(|e| PipelineError::Packaging(e.to_string()))?;

        if !exit.success() {
            return Err(PipelineError::Packaging(exit.describe()));
        }

        let package = &context.layout.package_file;
        if !package.is_file() {
            return Err(PipelineError::Packaging(format!(
                "{} reported success but {} was not produced",
                ToolKind::Packager,
                package.display()
            )));
        }

        context.artifact = Some(PackageArtifact::new(package));
        Ok(StageOutcome::Completed(format!("Packaged {}", file_name)))
    }
}

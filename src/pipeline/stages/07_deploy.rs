use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use crate::tools::ToolKind;
use async_trait::async_trait;

/// `adb install -r` of the freshly built package. Errors from here are never fatal.
pub struct DeployStage;

#[async_trait]
impl PipelineStage for DeployStage {
    fn state(&self) -> PipelineState {
        PipelineState::Deploy
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let invocation = context.invocation(ToolKind::DeviceBridge).args([
            "install".to_string(),
            "-r".to_string(),
            context.config.package_file_name(),
        ]);

        let exit = context
            .run_tool(&invocation)
            .await
            .map_err(|e| PipelineError::Deploy(e.to_string()))?;

        if !exit.success() {
            return Err(PipelineError::Deploy(exit.describe()));
        }

        Ok(StageOutcome::Completed("Installed on device".to_string()))
    }
}

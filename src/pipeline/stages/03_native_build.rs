use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use crate::tools::ToolKind;
use async_trait::async_trait;
use tracing::info;

/// Build flag that compiles the validation code path in (`-D_VALIDATION`).
pub const VALIDATION_BUILD_FLAG: &str = "APP_CFLAGS=-D_VALIDATION";

pub struct NativeBuildStage;

#[async_trait]
impl PipelineStage for NativeBuildStage {
    fn state(&self) -> PipelineState {
        PipelineState::Build
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        let mut invocation = context.invocation(ToolKind::NativeBuild);
        if context.run.validation {
            invocation = invocation.arg(VALIDATION_BUILD_FLAG);
        }

        let exit = context
            .run_tool(&invocation)
            .await
            .map_err(|e| PipelineError::NativeBuild(e.to_string()))?;

        if !exit.success() {
            return Err(PipelineError::NativeBuild(exit.describe()));
        }

        info!("Build successful");
        Ok(StageOutcome::Completed("Build successful".to_string()))
    }
}

use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::result::StageOutcome;
use crate::pipeline::stage_trait::PipelineStage;
use crate::pipeline::state::PipelineState;
use crate::tools::ToolKind;
use async_trait::async_trait;
use tracing::info;

/// Generates `build.xml` with the scaffolding generator when it is missing.
pub struct ScaffoldStage;

#[async_trait]
impl PipelineStage for ScaffoldStage {
    fn state(&self) -> PipelineState {
        PipelineState::Scaffold
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError> {
        if context.layout.descriptor.is_file() {
            return Ok(StageOutcome::Skipped(format!(
                "{} present",
                context.layout.descriptor.display()
            )));
        }

        let sdk_target = context.config.sdk_target.clone();
        info!("build.xml not present, generating with {}", sdk_target);

        let invocation = context
            .invocation(ToolKind::Scaffolder)
            .args(["update", "project", "-p", "./", "-t", sdk_target.as_str()]);

        let exit = context
            .run_tool(&invocation)
            .await
            .map_err(|e| PipelineError::ScaffoldGeneration(e.to_string()))?;

        if !exit.success() {
            return Err(PipelineError::ScaffoldGeneration(exit.describe()));
        }

        Ok(StageOutcome::Completed(format!(
            "Generated build.xml for {}",
            sdk_target
        )))
    }
}

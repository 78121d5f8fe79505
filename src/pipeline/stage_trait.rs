use super::context::PipelineContext;
use super::error::PipelineError;
use super::result::StageOutcome;
use super::state::PipelineState;
use async_trait::async_trait;

#[async_trait]
pub trait PipelineStage: Send + Sync {
    /// State this stage runs in
    fn state(&self) -> PipelineState;

    async fn execute(&self, context: &mut PipelineContext) -> Result<StageOutcome, PipelineError>;
}

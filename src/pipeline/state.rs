use super::config::RunConfig;
use serde::Serialize;
use std::fmt;

/// Position of a run in the pipeline
///
/// ```text
/// PRECHECK → SCAFFOLD → BUILD → [VALIDATION_STAGE] → ASSETS → PACKAGE → [DEPLOY] → RELOCATE → DONE
/// ```
///
/// Every non-terminal state except DEPLOY can fall into FAILED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    Precheck,
    Scaffold,
    Build,
    ValidationStage,
    Assets,
    Package,
    Deploy,
    Relocate,
    Done,
    Failed,
}

impl PipelineState {
    pub const INITIAL: PipelineState = PipelineState::Precheck;

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    /// Whether a fatal error in this state moves the run to FAILED
    pub fn can_fail(self) -> bool {
        !self.is_terminal() && self != PipelineState::Deploy
    }

    /// State that follows this one once it has finished (or, for DEPLOY, even if it did not)
    pub fn next(self, run: &RunConfig) -> PipelineState {
        match self {
            PipelineState::Precheck => PipelineState::Scaffold,
            PipelineState::Scaffold => PipelineState::Build,
            PipelineState::Build if run.validation => PipelineState::ValidationStage,
            PipelineState::Build => PipelineState::Assets,
            PipelineState::ValidationStage => PipelineState::Assets,
            PipelineState::Assets => PipelineState::Package,
            PipelineState::Package if run.deploy => PipelineState::Deploy,
            PipelineState::Package => PipelineState::Relocate,
            PipelineState::Deploy => PipelineState::Relocate,
            PipelineState::Relocate => PipelineState::Done,
            PipelineState::Done => PipelineState::Done,
            PipelineState::Failed => PipelineState::Failed,
        }
    }

    /// Every state a fully successful run visits, terminal DONE included
    #[cfg(test)]
    pub fn happy_path(run: &RunConfig) -> Vec<PipelineState> {
        let mut path = vec![PipelineState::INITIAL];
        let mut state = PipelineState::INITIAL;
        while !state.is_terminal() {
            state = state.next(run);
            path.push(state);
        }
        path
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Precheck => "PRECHECK",
            PipelineState::Scaffold => "SCAFFOLD",
            PipelineState::Build => "BUILD",
            PipelineState::ValidationStage => "VALIDATION_STAGE",
            PipelineState::Assets => "ASSETS",
            PipelineState::Package => "PACKAGE",
            PipelineState::Deploy => "DEPLOY",
            PipelineState::Relocate => "RELOCATE",
            PipelineState::Done => "DONE",
            PipelineState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

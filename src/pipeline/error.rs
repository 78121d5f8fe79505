use super::state::PipelineState;
use std::path::PathBuf;
use thiserror::Error;

const SUBMODULE_HINT: &str =
    "Clone them using:\n\tgit submodule init\n\tgit submodule update";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("External dependencies not loaded: {}", format_paths(.missing))]
    MissingDependency { missing: Vec<PathBuf> },

    #[error("Project update failed: {0}")]
    ScaffoldGeneration(String),

    #[error("Error building project: {0}")]
    NativeBuild(String),

    #[error("Could not stage validation layers: {0}")]
    ValidationStaging(String),

    #[error("Could not stage assets: {0}")]
    AssetStaging(String),

    #[error("Error during packaging: {0}")]
    Packaging(String),

    #[error("Could not deploy to device: {0}")]
    Deploy(String),

    #[error("Could not move package to output directory: {0}")]
    Relocation(String),
}

impl PipelineError {
    /// Fatal errors end the run in FAILED; the rest are reported as warnings
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PipelineError::Deploy(_))
    }

    /// Stage that raises this error
    pub fn stage(&self) -> PipelineState {
        match self {
            PipelineError::MissingDependency { .. } => PipelineState::Precheck,
            PipelineError::ScaffoldGeneration(_) => PipelineState::Scaffold,
            PipelineError::NativeBuild(_) => PipelineState::Build,
            PipelineError::ValidationStaging(_) => PipelineState::ValidationStage,
            PipelineError::AssetStaging(_) => PipelineState::Assets,
            PipelineError::Packaging(_) => PipelineState::Package,
            PipelineError::Deploy(_) => PipelineState::Deploy,
            PipelineError::Relocation(_) => PipelineState::Relocate,
        }
    }

    /// What the user can do about it, when there is something
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            PipelineError::MissingDependency { .. } => Some(SUBMODULE_HINT),
            _ => None,
        }
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

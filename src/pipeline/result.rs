use super::state::PipelineState;
use crate::config::APK_NAME;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a stage, or of the whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResult {
    pub success: bool,
    pub message: String,
}

impl StageResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Process exit status for this result
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// What a stage reports when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Completed(String),
    Skipped(String),
}

/// The package produced by a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageArtifact {
    pub name: String,
    pub path: PathBuf,
}

impl PackageArtifact {
    pub fn new(path: &Path) -> Self {
        Self {
            name: APK_NAME.to_string(),
            path: path.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Skipped,
    Warning,
    Failed,
}

/// One visited stage in a run's trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRecord {
    pub stage: PipelineState,
    pub status: StageStatus,
    pub message: String,
}

/// Everything a run produced: overall result, trace, warnings, artifact
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub result: StageResult,
    pub final_state: PipelineState,
    pub trace: Vec<StageRecord>,
    pub warnings: Vec<String>,
    pub artifact: Option<PackageArtifact>,
}

impl PipelineReport {
    pub fn exit_code(&self) -> i32 {
        self.result.exit_code()
    }

    /// States visited in order, ending with the terminal state
    pub fn visited(&self) -> Vec<PipelineState> {
        self.trace
            .iter()
            .map(|r| r.stage)
            .chain(std::iter::once(self.final_state))
            .collect()
    }

    pub fn record(&self, stage: PipelineState) -> Option<&StageRecord> {
        self.trace.iter().find(|r| r.stage == stage)
    }
}

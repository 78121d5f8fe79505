//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { project_dir } => {
                info!(project = %project_dir, "Starting build pipeline");
            }
            ProgressEvent::StageStarted { stage } => {
                info!(stage = %stage, "Starting stage");
            }
            ProgressEvent::StageSkipped { stage, reason } => {
                debug!(stage = %stage, reason = %reason, "Stage skipped");
            }
            ProgressEvent::StageComplete { stage, duration } => {
                info!(
                    stage = %stage,
                    duration_ms = duration.as_millis(),
                    "Stage complete"
                );
            }
            ProgressEvent::StageWarning { stage, message } => {
                warn!(stage = %stage, "{}", message);
            }
            ProgressEvent::Completed {
                stages_run,
                total_time,
            } => {
                info!(
                    stages = stages_run,
                    total_time_ms = total_time.as_millis(),
                    "Pipeline complete"
                );
            }
            ProgressEvent::Failed { stage, error } => {
                error!(stage = %stage, "{}", error);
            }
        }
    }
}

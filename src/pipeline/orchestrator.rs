use super::config::RunConfig;
use super::context::PipelineContext;
use super::error::PipelineError;
use super::result::{PipelineReport, StageOutcome, StageRecord, StageResult, StageStatus};
use super::stages::stage_for;
use super::state::PipelineState;
use crate::config::ApkpipeConfig;
use crate::progress::{ProgressEvent, ProgressHandler};
use crate::tools::{HostPlatform, ToolRunner};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Drives one project through the pipeline states, stopping at the first fatal error.
pub struct PipelineController {
    project_dir: PathBuf,
    config: ApkpipeConfig,
    runner: Arc<dyn ToolRunner>,
    platform: HostPlatform,
    progress_handler: Option<Arc<dyn ProgressHandler>>,
}

impl PipelineController {
    pub fn new(project_dir: &Path, config: ApkpipeConfig, runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            config,
            runner,
            platform: HostPlatform::current(),
            progress_handler: None,
        }
    }

    pub fn with_progress(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = Some(handler);
        self
    }

    pub fn with_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Runs the pipeline and returns the overall outcome
    pub async fn run(&self, run: RunConfig) -> StageResult {
        self.execute(run).await.result
    }

    /// Runs the pipeline and returns the full report
    pub async fn execute(&self, run: RunConfig) -> PipelineReport {
        let start = Instant::now();
        info!(
            deploy = run.deploy,
            validation = run.validation,
            "Starting pipeline for: {}",
            self.project_dir.display()
        );
        self.emit(ProgressEvent::Started {
            project_dir: self.project_dir.display().to_string(),
        });

        let mut context = PipelineContext::new(
            &self.project_dir,
            self.config.clone(),
            run,
            self.platform,
            self.runner.clone(),
        );

        let mut state = PipelineState::INITIAL;
        let mut trace = Vec::new();
        let mut warnings = Vec::new();
        let mut failure: Option<PipelineError> = None;

        while !state.is_terminal() {
            let Some(stage) = stage_for(state) else {
                break;
            };

            self.emit(ProgressEvent::StageStarted { stage: state });
            let stage_start = Instant::now();

            match stage.execute(&mut context).await {
                Ok(StageOutcome::Completed(message)) => {
                    self.emit(ProgressEvent::StageComplete {
                        stage: state,
                        duration: stage_start.elapsed(),
                    });
                    trace.push(record(state, StageStatus::Completed, message));
                    state = state.next(&run);
                }
                Ok(StageOutcome::Skipped(reason)) => {
                    self.emit(ProgressEvent::StageSkipped {
                        stage: state,
                        reason: reason.clone(),
                    });
                    trace.push(record(state, StageStatus::Skipped, reason));
                    state = state.next(&run);
                }
                Err(e) if !e.is_fatal() || !state.can_fail() => {
                    let message = e.to_string();
                    self.emit(ProgressEvent::StageWarning {
                        stage: state,
                        message: message.clone(),
                    });
                    warnings.push(message.clone());
                    trace.push(record(state, StageStatus::Warning, message));
                    state = state.next(&run);
                }
                Err(e) => {
                    let message = e.to_string();
                    let failed_stage = e.stage();
                    self.emit(ProgressEvent::Failed {
                        stage: failed_stage,
                        error: message.clone(),
                    });
                    if let Some(hint) = e.remediation() {
                        error!("{}", hint);
                    }
                    trace.push(record(failed_stage, StageStatus::Failed, message));
                    failure = Some(e);
                    state = PipelineState::Failed;
                }
            }

            debug!(next = %state, "Transition");
        }

        let result = match &failure {
            Some(e) => match e.remediation() {
                Some(hint) => StageResult::failed(format!("{}\n{}", e, hint)),
                None => StageResult::failed(e.to_string()),
            },
            None => {
                self.emit(ProgressEvent::Completed {
                    stages_run: trace.len(),
                    total_time: start.elapsed(),
                });
                let location = context
                    .artifact
                    .as_ref()
                    .map(|a| a.path.display().to_string())
                    .unwrap_or_default();
                StageResult::ok(format!("Package written to {}", location))
            }
        };

        PipelineReport {
            result,
            final_state: state,
            trace,
            warnings,
            artifact: if failure.is_none() {
                context.artifact
            } else {
                None
            },
        }
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }
}

fn record(stage: PipelineState, status: StageStatus, message: String) -> StageRecord {
    StageRecord {
        stage,
        status,
        message,
    }
}

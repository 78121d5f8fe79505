//! Progress handler trait and events

use crate::pipeline::PipelineState;
use std::time::Duration;

/// Events emitted while the pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started { project_dir: String },

    /// A stage is about to run
    StageStarted { stage: PipelineState },

    /// A stage decided there was nothing to do
    StageSkipped { stage: PipelineState, reason: String },

    /// A stage finished successfully
    StageComplete {
        stage: PipelineState,
        duration: Duration,
    },

    /// A stage failed without failing the run
    StageWarning { stage: PipelineState, message: String },

    /// Run reached DONE
    Completed {
        stages_run: usize,
        total_time: Duration,
    },

    /// Run reached FAILED
    Failed { stage: PipelineState, error: String },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        NoOpHandler.on_progress(&ProgressEvent::Started {
            project_dir: "/test".to_string(),
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::StageStarted {
            stage: PipelineState::Build,
        });
        handler.on_progress(&ProgressEvent::StageComplete {
            stage: PipelineState::Build,
            duration: Duration::from_millis(50),
        });
        handler.on_progress(&ProgressEvent::Completed {
            stages_run: 6,
            total_time: Duration::from_secs(5),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}

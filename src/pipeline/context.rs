//! Per-run state shared by the stages

use std::path::Path;
use std::sync::Arc;

use crate::config::ApkpipeConfig;
use crate::tools::{HostPlatform, ToolError, ToolExit, ToolInvocation, ToolKind, ToolRunner};

use super::config::RunConfig;
use super::layout::ProjectLayout;
use super::result::PackageArtifact;

/// Context handed to each stage. Holds the explicit base path, so nothing
/// touches the process working directory.
pub struct PipelineContext {
    pub layout: ProjectLayout,
    pub config: ApkpipeConfig,
    pub run: RunConfig,
    pub platform: HostPlatform,
    pub runner: Arc<dyn ToolRunner>,

    /// Set by the packaging stage, moved by relocation
    pub artifact: Option<PackageArtifact>,
}

impl PipelineContext {
    pub fn new(
        project_dir: &Path,
        config: ApkpipeConfig,
        run: RunConfig,
        platform: HostPlatform,
        runner: Arc<dyn ToolRunner>,
    ) -> Self {
        Self {
            layout: ProjectLayout::new(project_dir, &config),
            config,
            run,
            platform,
            runner,
            artifact: None,
        }
    }

    /// Starts a request for `tool`, run from the project directory
    pub fn invocation(&self, tool: ToolKind) -> ToolInvocation {
        let program = self
            .config
            .tool_override(tool)
            .unwrap_or_else(|| tool.executable(self.platform));
        ToolInvocation::new(tool, program, &self.layout.project_dir)
    }

    pub async fn run_tool(&self, invocation: &ToolInvocation) -> Result<ToolExit, ToolError> {
        self.runner.run(invocation).await
    }
}

use super::invocation::ToolInvocation;
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Observed termination of an external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ToolExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Executes tool invocations. Implementations block until the tool terminates.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, ToolError>;
}

/// Spawns the real program directly (no shell), inheriting stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, ToolError> {
        debug!(
            tool = %invocation.tool,
            cwd = %invocation.working_dir.display(),
            "Running {}",
            invocation.command_line()
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ToolError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        debug!(tool = %invocation.tool, status = %status, "Tool finished");

        Ok(ToolExit {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::tools::ToolKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_process_runner_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let invocation =
            ToolInvocation::new(ToolKind::NativeBuild, "sh", dir.path()).args(["-c", "exit 3"]);

        let exit = ProcessRunner.run(&invocation).await.unwrap();
        assert_eq!(exit.code, Some(3));
        assert!(!exit.success());
    }

    #[tokio::test]
    async fn test_process_runner_uses_working_dir() {
        let dir = TempDir::new().unwrap();
        let invocation = ToolInvocation::new(ToolKind::Packager, "sh", dir.path())
            .args(["-c", "touch created-here"]);

        let exit = ProcessRunner.run(&invocation).await.unwrap();
        assert!(exit.success());
        assert!(dir.path().join("created-here").exists());
    }

    #[tokio::test]
    async fn test_process_runner_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let invocation = ToolInvocation::new(
            ToolKind::DeviceBridge,
            "definitely-not-an-installed-tool-4821",
            dir.path(),
        );

        let err = ProcessRunner.run(&invocation).await.unwrap_err();
        assert!(err
            .to_string()
            .contains("definitely-not-an-installed-tool-4821"));
    }

    #[test]
    fn test_exit_describe() {
        assert_eq!(ToolExit::from_code(2).describe(), "exit code 2");
        assert_eq!(ToolExit { code: None }.describe(), "terminated by signal");
    }
}

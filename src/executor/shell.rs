//! Shell-backed executor
//!
//! Hands each command line to `<shell> -c` with the terminal inherited,
//! so interactive aliases like `access` and `shell` behave as if typed.

use super::{exit_code, ExitStatus, ProcessExecutor};
use crate::error::{DockaliasError, DockaliasResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs command lines through the host shell
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    working_dir: Option<PathBuf>,
}

impl ShellExecutor {
    /// Create an executor using `shell` (e.g. "sh", "bash")
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            working_dir: None,
        }
    }

    /// Run children from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new("sh")
    }
}

#[async_trait]
impl ProcessExecutor for ShellExecutor {
    async fn spawn(&self, command_line: &str) -> DockaliasResult<ExitStatus> {
        debug!("Executing: {} -c {:?}", self.shell, command_line);

        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().await.map_err(|e| {
            DockaliasError::command_failed(format!("{} -c {}", self.shell, command_line), e)
        })?;

        let code = exit_code(status);
        debug!("Command exited with status {}", code);
        Ok(code)
    }
}

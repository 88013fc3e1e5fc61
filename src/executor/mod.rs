//! Process execution for alias command lines
//!
//! The dispatcher only talks to [`ProcessExecutor`], so the real shell
//! backend can be swapped for a dry run or a recording fake.

mod dry_run;
mod shell;

pub use dry_run::DryRunExecutor;
pub use shell::ShellExecutor;

use crate::error::DockaliasResult;
use async_trait::async_trait;

/// Exit status of a finished command, as the shell would report it
pub type ExitStatus = i32;

/// Runs one opaque command line to completion
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run `command_line` in a child process and wait for it
    ///
    /// A non-zero status is not an error; errors mean the child could not
    /// be started at all.
    async fn spawn(&self, command_line: &str) -> DockaliasResult<ExitStatus>;
}

/// Map a process status to a shell-style code
///
/// Signals become `128 + signo`; anything unrepresentable becomes 1.
pub fn exit_code(status: std::process::ExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

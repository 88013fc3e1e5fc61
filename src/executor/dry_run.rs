//! Executor that prints instead of running

use super::{ExitStatus, ProcessExecutor};
use crate::error::DockaliasResult;
use async_trait::async_trait;
use console::style;

/// Prints each command line as `+ <command>` and reports success
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessExecutor for DryRunExecutor {
    async fn spawn(&self, command_line: &str) -> DockaliasResult<ExitStatus> {
        println!("{} {}", style("+").dim(), command_line);
        Ok(0)
    }
}

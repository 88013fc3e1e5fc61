//! Alias dispatcher
//!
//! One stateless pass per invocation: resolve the alias, then run its
//! command lines one at a time, stopping at the first non-zero status.

use crate::error::DockaliasResult;
use crate::executor::{ExitStatus, ProcessExecutor};
use crate::registry::{AliasEntry, Registry};
use tracing::{debug, info};

/// Resolves aliases against a registry and runs them on an executor
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    executor: &'a dyn ProcessExecutor,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, executor: &'a dyn ProcessExecutor) -> Self {
        Self { registry, executor }
    }

    /// Run a single entry and return its exit status unchanged
    pub async fn run(&self, entry: &AliasEntry) -> DockaliasResult<ExitStatus> {
        info!("Running alias '{}'", entry.name);
        self.executor.spawn(&entry.command_line).await
    }

    /// Run entries in order, stopping at the first failure
    pub async fn run_sequence(&self, entries: &[&AliasEntry]) -> DockaliasResult<ExitStatus> {
        for entry in entries {
            let code = self.run(entry).await?;
            if code != 0 {
                debug!("Alias '{}' failed with status {}, stopping", entry.name, code);
                return Ok(code);
            }
        }
        Ok(0)
    }

    /// Resolve `name` and run everything it expands to
    pub async fn run_alias(&self, name: &str) -> DockaliasResult<ExitStatus> {
        let entries = self.registry.resolve(name)?;
        self.run_sequence(&entries).await
    }

    /// Run the registry's default alias
    pub async fn run_default(&self) -> DockaliasResult<ExitStatus> {
        debug!("No alias given, running default '{}'", self.registry.default_alias());
        self.run_alias(self.registry.default_alias()).await
    }
}

//! Run command - resolve an alias and execute it

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::{DockaliasError, DockaliasResult};
use crate::executor::{DryRunExecutor, ExitStatus, ProcessExecutor, ShellExecutor};
use crate::registry::Registry;
use std::path::PathBuf;

/// Flags that affect how aliases are executed
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print command lines instead of running them
    pub dry_run: bool,
    /// Working directory for child processes
    pub directory: Option<PathBuf>,
}

/// Execute the alias named by `args[0]`, or the default alias if `args` is empty
pub async fn execute(
    args: &[String],
    options: &RunOptions,
    config: &Config,
) -> DockaliasResult<ExitStatus> {
    let registry = Registry::from_config(config)?;

    let executor: Box<dyn ProcessExecutor> = if options.dry_run {
        Box::new(DryRunExecutor::new())
    } else {
        let shell = ShellExecutor::new(&config.general.shell);
        match &options.directory {
            Some(dir) => Box::new(shell.with_working_dir(dir)),
            None => Box::new(shell),
        }
    };

    let dispatcher = Dispatcher::new(&registry, executor.as_ref());

    match args {
        [] => dispatcher.run_default().await,
        [name] => dispatcher.run_alias(name).await,
        [name, rest @ ..] => Err(DockaliasError::UnexpectedArguments {
            alias: name.clone(),
            args: rest.to_vec(),
        }),
    }
}

//! dockalias - CLI entry point that dispatches to commands or aliases.

use clap::Parser;
use dockalias::cli::commands::{self, RunOptions};
use dockalias::cli::{Cli, Commands};
use dockalias::config::ConfigManager;
use dockalias::error::{DockaliasError, DockaliasResult};
use dockalias::executor::ExitStatus;
use dockalias::ui;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(status) => exit_code(status),
        Err(e) => {
            ui::error(&e.to_string(), e.hint());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DockaliasResult<ExitStatus> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("dockalias=warn"),
        1 => EnvFilter::new("dockalias=info"),
        _ => EnvFilter::new("dockalias=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // These don't need config loading
    match cli.command {
        Some(Commands::Init(args)) => return commands::init(args).await.map(|()| 0),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            return Ok(0);
        }
        _ => {}
    }

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let local_config_path = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        let base = match cli.directory {
            Some(ref dir) => dir.clone(),
            None => std::env::current_dir()
                .map_err(|e| DockaliasError::io("getting current directory", e))?,
        };
        let found = ConfigManager::find_local_config(&base);
        if let Some(ref path) = found {
            debug!("Found local config: {}", path.display());
        }
        found
    };

    let config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    let options = RunOptions {
        dry_run: cli.dry_run,
        directory: cli.directory,
    };

    match cli.command {
        Some(Commands::Init(_)) | Some(Commands::Completions { .. }) => {
            unreachable!("handled above")
        }
        Some(Commands::Help) => commands::help(&config).await.map(|()| 0),
        Some(Commands::List(args)) => commands::list(args, &config).await.map(|()| 0),
        Some(Commands::Alias(args)) => commands::run(&args, &options, &config).await,
        None => commands::run(&[], &options, &config).await,
    }
}

/// Pass a child's status through as our own
///
/// Codes are truncated to a byte like a shell would, keeping failures
/// non-zero.
fn exit_code(status: ExitStatus) -> ExitCode {
    match u8::try_from(status & 0xff) {
        Ok(0) if status != 0 => ExitCode::FAILURE,
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

//! Init command - create project-local .dockalias.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_FILE;
use crate::error::{DockaliasError, DockaliasResult};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# dockalias project configuration
# Settings here override your global config (~/.config/dockalias/config.toml)

[general]
# shell = "sh"
# default_alias = "all"

[project]
# compose = "docker compose"
# service = "web"
# shell = "bash"
# manage = "python manage.py"

# Extra aliases. Same name as a built-in replaces it.
# [[alias]]
# name = "test"
# description = "Run the test suite"
# command = "{compose} exec {service} {manage} test"

# [[composite]]
# name = "rebuild"
# description = "Tear everything down and start fresh"
# steps = ["down-all", "up"]
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> DockaliasResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| DockaliasError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(DockaliasError::ConfigExists(config_path));
    }

    ensure_dir(&target_dir).await?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| DockaliasError::io(format!("writing {}", config_path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Created project config",
        &config_path.display().to_string(),
    );

    Ok(())
}

async fn ensure_dir(dir: &Path) -> DockaliasResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| DockaliasError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}

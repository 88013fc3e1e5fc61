//! Help command - print the alias table

use crate::config::Config;
use crate::error::DockaliasResult;
use crate::registry::Registry;
use crate::ui::{self, UiContext};

/// Execute the help command
pub async fn execute(config: &Config) -> DockaliasResult<()> {
    let registry = Registry::from_config(config)?;
    ui::print_help(&UiContext::detect(), &registry);
    Ok(())
}

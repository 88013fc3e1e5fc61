//! List command - show registered aliases

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::DockaliasResult;
use crate::registry::{AliasRef, Registry};
use crate::ui::{self, UiContext};
use serde::Serialize;

/// JSON shape of one alias
#[derive(Debug, Serialize)]
struct AliasListing<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [String]>,
    default: bool,
}

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> DockaliasResult<()> {
    let registry = Registry::from_config(config)?;

    match args.format {
        OutputFormat::Table => ui::print_help(&UiContext::detect(), &registry),
        OutputFormat::Json => println!("{}", render_json(&registry)?),
        OutputFormat::Plain => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn render_json(registry: &Registry) -> DockaliasResult<String> {
    let listings: Vec<_> = registry
        .iter()
        .map(|alias| {
            let (command, steps) = match alias {
                AliasRef::Command(entry) => (Some(entry.command_line.as_str()), None),
                AliasRef::Composite(composite) => (None, Some(composite.steps.as_slice())),
            };
            AliasListing {
                name: alias.name(),
                description: alias.description(),
                command,
                steps,
                default: alias.name() == registry.default_alias(),
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&listings)?)
}

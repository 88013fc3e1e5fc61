//! Output functions for consistent CLI formatting

use super::context::UiContext;
use crate::registry::Registry;
use console::{measure_text_width, style};

/// Render the alias table: one line per alias, names padded to one column
///
/// Plain aliases come first, then composites, each in declaration order.
/// Descriptions are folded onto one line. The default alias gets a
/// ` (default)` marker.
pub fn help_lines(ctx: &UiContext, registry: &Registry) -> Vec<String> {
    let width = registry
        .iter()
        .map(|alias| measure_text_width(alias.name()))
        .max()
        .unwrap_or(0);

    registry
        .iter()
        .map(|alias| {
            let mut description = alias
                .description()
                .unwrap_or_default()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if alias.name() == registry.default_alias() {
                if !description.is_empty() {
                    description.push(' ');
                }
                description.push_str("(default)");
            }

            let name = if description.is_empty() {
                alias.name().to_string()
            } else {
                let padding = width.saturating_sub(measure_text_width(alias.name()));
                format!("{}{}", alias.name(), " ".repeat(padding))
            };
            let name = if ctx.use_fancy_output() {
                style(name).cyan().bold().to_string()
            } else {
                name
            };

            if description.is_empty() {
                name
            } else if ctx.use_fancy_output() {
                format!("{}  {}", name, style(description).dim())
            } else {
                format!("{}  {}", name, description)
            }
        })
        .collect()
}

/// Print the alias table to stdout
pub fn print_help(ctx: &UiContext, registry: &Registry) {
    for line in help_lines(ctx, registry) {
        println!("{}", line);
    }
}

/// Display a success step with detail
pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    if ctx.use_fancy_output() {
        println!("{} {} ({})", style("✓").green(), message, style(detail).dim());
    } else {
        println!("[OK] {} ({})", message, detail);
    }
}

/// Print an error with optional hint to stderr
pub fn error(message: &str, hint: Option<&str>) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    if let Some(hint) = hint {
        eprintln!("{} {}", style("Hint:").yellow(), hint);
    }
}

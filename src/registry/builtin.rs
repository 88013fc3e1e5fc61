//! Built-in alias table for a compose-managed web project

use super::entry::{AliasEntry, CompositeAlias};
use crate::config::schema::ProjectConfig;

/// Name of the built-in default composite
pub const DEFAULT_COMPOSITE: &str = "all";

/// `(name, description, template)` in help order
const BUILTIN_COMMANDS: &[(&str, &str, &str)] = &[
    ("up", "Start the services in the background", "{compose} up -d"),
    ("down", "Stop and remove the services", "{compose} down"),
    (
        "down-v",
        "Stop and remove the services and their volumes",
        "{compose} down -v",
    ),
    (
        "down-all",
        "Stop and remove the services, volumes and all images",
        "{compose} down -v --rmi all",
    ),
    (
        "access",
        "Open a shell inside the primary service",
        "{compose} exec {service} {shell}",
    ),
    (
        "reload",
        "Restart the primary service",
        "{compose} restart {service}",
    ),
    (
        "logs",
        "Follow the primary service's logs",
        "{compose} logs -f {service}",
    ),
    ("logs-all", "Follow the logs of all services", "{compose} logs -f"),
    (
        "migrations",
        "Generate pending schema migrations",
        "{compose} exec {service} {manage} makemigrations",
    ),
    (
        "migrate",
        "Apply schema migrations",
        "{compose} exec {service} {manage} migrate",
    ),
    (
        "shell",
        "Open the application console",
        "{compose} exec {service} {manage} shell",
    ),
    (
        "perm",
        "Give the working directory back to the current user",
        "sudo chown -R \"$(id -u):$(id -g)\" .",
    ),
];

/// Built-in plain aliases, templates expanded against `project`
pub fn commands(project: &ProjectConfig) -> Vec<AliasEntry> {
    BUILTIN_COMMANDS
        .iter()
        .map(|(name, description, template)| {
            AliasEntry::new(*name, expand_placeholders(template, project))
                .with_description(*description)
        })
        .collect()
}

/// Built-in composite aliases
pub fn composites() -> Vec<CompositeAlias> {
    vec![CompositeAlias::new(DEFAULT_COMPOSITE, ["down", "up"])
        .with_description("Recreate the services (down, then up)")]
}

/// Substitute `{compose}`, `{service}`, `{shell}` and `{manage}`
///
/// Any other text, including unknown `{...}` groups and shell `${VAR}`
/// expansions, is left as is.
pub fn expand_placeholders(template: &str, project: &ProjectConfig) -> String {
    let values = [
        ("{compose}", project.compose.as_str()),
        ("{service}", project.service.as_str()),
        ("{shell}", project.shell.as_str()),
        ("{manage}", project.manage.as_str()),
    ];

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        for (token, value) in values {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

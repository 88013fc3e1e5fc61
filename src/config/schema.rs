//! Configuration schema for dockalias
//!
//! Global configuration is stored at `~/.config/dockalias/config.toml`,
//! project overrides in a `.dockalias.toml` next to the compose file.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Values substituted into alias templates
    pub project: ProjectConfig,

    /// User-defined aliases (added to, or replacing, the built-in table)
    #[serde(rename = "alias", skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasConfig>,

    /// User-defined composite aliases
    #[serde(rename = "composite", skip_serializing_if = "Vec::is_empty")]
    pub composites: Vec<CompositeConfig>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Shell used to run alias command lines (`<shell> -c <command>`)
    pub shell: String,

    /// Alias run when none is given on the command line
    pub default_alias: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            default_alias: "all".to_string(),
        }
    }
}

/// Project settings used by `{compose}`, `{service}`, `{shell}` and `{manage}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Container orchestration command
    pub compose: String,

    /// Primary service targeted by access, logs, migrate, ...
    pub service: String,

    /// Interactive shell inside the primary service
    pub shell: String,

    /// Framework management command inside the primary service
    pub manage: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            compose: "docker compose".to_string(),
            service: "web".to_string(),
            shell: "bash".to_string(),
            manage: "python manage.py".to_string(),
        }
    }
}

/// A single user-defined alias
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Command line template, placeholders are expanded once at startup
    pub command: String,
}

/// A user-defined sequence of aliases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub steps: Vec<String>,
}

//! Error types for dockalias
//!
//! All modules use `DockaliasResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dockalias operations
pub type DockaliasResult<T> = Result<T, DockaliasError>;

/// All errors that can occur in dockalias
#[derive(Error, Debug)]
pub enum DockaliasError {
    // Registry errors
    #[error("Unknown alias: {name}. Available aliases: {}", .available.join(", "))]
    UnknownAlias {
        name: String,
        available: Vec<String>,
    },

    #[error("Alias defined more than once: {0}")]
    DuplicateAlias(String),

    #[error("Invalid alias '{name}': {reason}")]
    InvalidAlias { name: String, reason: String },

    #[error("Alias '{alias}' takes no arguments, got: {}", .args.join(" "))]
    UnexpectedArguments { alias: String, args: Vec<String> },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file already exists: {0}")]
    ConfigExists(PathBuf),

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DockaliasError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create an invalid alias error
    pub fn invalid_alias(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAlias {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownAlias { .. } => Some("Run: dockalias help"),
            Self::CommandFailed { .. } => {
                Some("Check that the shell set in [general] shell is installed")
            }
            Self::ConfigExists(_) => Some("Pass --force to overwrite it"),
            Self::DuplicateAlias(_) | Self::InvalidAlias { .. } => {
                Some("Fix the [[alias]] and [[composite]] tables in your config")
            }
            _ => None,
        }
    }
}

//! dockalias - short aliases for compose project chores
//!
//! A registry of named shell command lines (bring the stack up or down,
//! open a shell in the primary service, run migrations, ...) and a
//! dispatcher that runs them with the terminal inherited.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod registry;
pub mod ui;

pub use error::{DockaliasError, DockaliasResult};

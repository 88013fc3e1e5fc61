//! Terminal output
//!
//! Styling is applied only when stdout is an interactive terminal outside
//! CI, so piped help output stays plain and aligned.

mod context;
mod output;

pub use context::UiContext;
pub use output::{error, help_lines, print_help, step_ok_detail};

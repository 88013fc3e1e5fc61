//! CLI command implementations

pub mod completions;
pub mod help;
pub mod init;
pub mod list;
pub mod run;

pub use completions::execute as completions;
pub use help::execute as help;
pub use init::execute as init;
pub use list::execute as list;
pub use run::{execute as run, RunOptions};

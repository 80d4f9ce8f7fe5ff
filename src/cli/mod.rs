//! Interactive shell for the bills dashboard.

pub mod commands;
pub mod forms;
pub mod help;
pub mod output;
pub mod shell;
pub mod table;

pub use commands::{CliMode, ShellContext};
pub use shell::run_cli;

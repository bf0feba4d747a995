//! Command-line interface: argument definitions and one handler per command.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};

//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - Clap argument definitions
//! - [`commands`] - Subcommand implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InitArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

//! CLI module for the cupcakes service
//!
//! Commands:
//! - init: create the database schema and exit
//! - serve: boot the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};

//! CLI argument definitions using clap
//!
//! Commands:
//! - cupcakes init --config <path>
//! - cupcakes serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cupcakes - a minimal cupcake catalog service
#[derive(Parser, Debug)]
#[command(name = "cupcakes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the cupcakes table and exit
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./cupcakes.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./cupcakes.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! Configuration management for the TPTP language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Log-level selection

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the TPTP language server
#[derive(Debug, Parser)]
#[command(name = "tptp-language-server")]
#[command(about = "Language server for TPTP formula files")]
#[command(version)]
pub struct Args {
    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            log_level: args.log_level,
        })
    }
}

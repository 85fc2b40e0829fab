//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Compute counters as of this date (YYYY-MM-DD).
    /// Defaults to the date of the latest moment.
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Moments listing arguments.
#[derive(Debug, Args)]
pub struct MomentsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// File to validate (defaults to the standard location)
        file: Option<PathBuf>,
    },
}

//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mousetrack - Preprocess mouse-tracking data from two-choice decision tasks
#[derive(Parser, Debug)]
#[command(name = "mousetrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process all subject CSV files in a directory
    Process {
        /// Directory containing one CSV file per subject
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for the unified CSV (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Process a single subject file and report its summary
    Inspect {
        /// Subject CSV file
        input: PathBuf,
    },

    /// Write a default config file
    Init {
        /// Where to write the config (default: ./mousetrack.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reeltag")]
#[command(author, version, about = "Movie identification and MP4 tagging tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the source directory and tag/rename files interactively
    Run {
        /// Override the configured source directory
        #[arg(long)]
        source: Option<PathBuf>,

        /// Override the configured destination directory
        #[arg(long)]
        destination: Option<PathBuf>,
    },

    /// Probe a media file and display its frame size and HD verdict
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses discovery if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

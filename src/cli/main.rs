use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    version = "0.1.0",
    about = "Personal notes and assignment deadline tracker"
)]
pub struct Cli {
    /// Path to the data directory holding the JSON stores
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the dltracker application
    #[clap(subcommand)]
    pub command: Commands,
}

//! Command-line argument definitions for the lendmap CLI.
//!
//! The diagram dataset is built in, so there is no input argument; the CLI
//! controls the output path, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the lendmap diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

//! CLI interface for pivot-signals
//!
//! Provides subcommands for:
//! - `scan`: Analyze every instrument and update the signals database
//! - `inspect`: Analyze one instrument and print its diagnostics
//! - `status`: Summarize the signals database
//! - `config`: Show the effective configuration

mod inspect;
mod scan;
mod status;

pub use inspect::InspectArgs;
pub use scan::ScanArgs;
pub use status::StatusArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pivot-signals")]
#[command(about = "RSI bias and pivot trendline break signals for daily equity data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze all instruments and update the signals database
    Scan(ScanArgs),
    /// Analyze a single instrument
    Inspect(InspectArgs),
    /// Summarize the signals database
    Status(StatusArgs),
    /// Show configuration
    Config,
}

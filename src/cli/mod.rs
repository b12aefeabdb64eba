//! CLI module for snakk.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// snakk - Podcast Transcript Consolidation
///
/// A CLI tool for tidying speaker-diarized transcripts: consecutive lines
/// from the same speaker are merged into one segment per speaker turn.
/// The name "snakk" comes from the Norwegian word for "talk."
#[derive(Parser, Debug)]
#[command(name = "snakk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge consecutive same-speaker lines of a transcript file
    Consolidate {
        /// Input transcript file
        input: String,

        /// Output file path
        output: String,

        /// Timestamp syntax of the input (mm:ss, hh:mm:ss, seconds)
        #[arg(short, long)]
        timestamps: Option<String>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Maximum silence in seconds before a same-speaker line starts a
        /// new segment (default: merge across any gap)
        #[arg(long)]
        max_gap: Option<f64>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

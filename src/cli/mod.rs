//! CLI module for Gathika.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Gathika - Audio Transcription and Analysis
///
/// Upload an audio file, get back a transcript and an AI-generated analysis.
/// Transcription and analysis are delegated to Groq-hosted models.
#[derive(Parser, Debug)]
#[command(name = "gathika")]
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
    /// Serve the single-page upload UI over HTTP
    Serve {
        /// Host to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Transcribe and analyze a local audio file
    Analyze {
        /// Path to the audio file
        file: String,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

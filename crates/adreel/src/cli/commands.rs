//! CLI command definitions.

use adreel::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Adreel - Promo video wizard over a generative AI provider
#[derive(Parser, Debug)]
#[command(name = "adreel")]
#[command(about = "Turn marketing copy into a four-scene promo video plan", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze marketing copy into a structured entity analysis
    Analyze {
        /// Marketing copy describing the product or promotion
        text: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Expand marketing copy into a four-scene storyboard
    Storyboard {
        /// Marketing copy describing the product or promotion
        text: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Run the full wizard: analysis, storyboard, previews, optional video
    Generate {
        /// Marketing copy describing the product or promotion
        text: String,

        /// Also synthesize the final video after the previews
        #[arg(long)]
        render: bool,

        /// Directory for saved preview and video assets
        #[arg(long)]
        out: Option<PathBuf>,

        /// Primary brand color as a hex string
        #[arg(long, default_value = DEFAULT_PRIMARY_COLOR)]
        primary_color: String,

        /// Secondary brand color as a hex string
        #[arg(long, default_value = DEFAULT_SECONDARY_COLOR)]
        secondary_color: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

//! Adreel CLI binary.
//!
//! This binary provides command-line access to the promo-video wizard:
//! - Analyze marketing copy into a structured entity analysis
//! - Expand copy into a four-scene storyboard
//! - Run the full pipeline with previews and optional video synthesis

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use adreel::BrandKit;
    use cli::{Cli, Commands, run_analyze, run_generate, run_storyboard};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Analyze { text, format } => {
            run_analyze(&text, format).await?;
        }

        Commands::Storyboard { text, format } => {
            run_storyboard(&text, format).await?;
        }

        Commands::Generate {
            text,
            render,
            out,
            primary_color,
            secondary_color,
        } => {
            let brand = BrandKit::new(primary_color, secondary_color);
            run_generate(&text, render, out.as_deref(), brand).await?;
        }
    }

    Ok(())
}

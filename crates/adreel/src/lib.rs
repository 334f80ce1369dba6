//! Adreel - Promo Video Wizard
//!
//! Adreel turns a few lines of marketing copy into a short promotional
//! video plan: a structured entity analysis, a fixed four-scene storyboard
//! (hook, solution, benefit, call to action), one preview still per scene,
//! and an asynchronously synthesized video. Generation runs against the
//! Google Generative Language API through a trait-based client, so the
//! pipeline itself stays provider-agnostic.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use adreel::{BrandKit, GeminiGenerator, StoryboardPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GEMINI_API_KEY from the environment or a .env file.
//!     let client = GeminiGenerator::new()?;
//!     let pipeline = StoryboardPipeline::new(client, BrandKit::default());
//!
//!     pipeline
//!         .start("Jual kopi robusta dengan rasa coklat", BrandKit::default())
//!         .await?;
//!     pipeline.fill_previews().await?;
//!
//!     let session = pipeline.store().snapshot();
//!     let scenes = session.storyboard.map(|s| s.scenes().len()).unwrap_or(0);
//!     println!("{scenes} scenes ready");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Adreel is organized as a workspace with focused crates:
//!
//! - `adreel_error` - Error types
//! - `adreel_core` - Session, storyboard and media data model
//! - `adreel_client` - `GenerationClient` trait and the Gemini REST driver
//! - `adreel_pipeline` - Observable session store and run orchestration
//!
//! This crate (`adreel`) re-exports everything for convenience and ships
//! the `adreel` CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use adreel_client::*;
pub use adreel_core::*;
pub use adreel_error::*;
pub use adreel_pipeline::*;

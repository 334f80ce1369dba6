//! Generation client for the Adreel pipeline.
//!
//! This crate defines the [`GenerationClient`] trait that generation
//! backends implement, and ships the Gemini REST driver
//! ([`GeminiGenerator`]) that talks to the Generative Language API:
//! structured `generateContent` calls for entity analysis and storyboard
//! expansion, image-modality `generateContent` for preview stills, and the
//! `predictLongRunning` operation protocol for video synthesis.
//!
//! Wire types live in [`dto`], prompt assembly in [`prompt`]. Both are
//! public so integrations and tests can build requests and parse captured
//! responses without going through the driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
pub mod dto;
mod extraction;
mod gemini;
pub mod prompt;

pub use client::GenerationClient;
pub use config::{AdreelConfig, GeneratorConfig, GeneratorConfigBuilder};
pub use extraction::{extract_json, parse_json};
pub use gemini::{API_KEY_VAR, GeminiGenerator};

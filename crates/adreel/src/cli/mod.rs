//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the adreel binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, OutputFormat};
pub use run::{run_analyze, run_generate, run_storyboard};

//! Error types for the Adreel workspace.
//!
//! This crate provides the foundation error types used throughout the Adreel
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The error families map onto the pipeline stages: input validation,
//! entity analysis, storyboard expansion, video synthesis, session state
//! bookkeeping, and client configuration. Preview synthesis has no error
//! family: preview failures are absorbed into a placeholder at the client
//! layer and never propagate.
//!
//! # Examples
//!
//! ```
//! use adreel_error::{AdreelResult, ValidationError, ValidationErrorKind};
//!
//! fn check_input(text: &str) -> AdreelResult<()> {
//!     if text.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyInput))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_input("   ").is_err());
//! assert!(check_input("Jual kopi robusta").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod state;
mod storyboard;
mod validation;
mod video;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{AdreelError, AdreelErrorKind, AdreelResult};
pub use state::{StateError, StateErrorKind};
pub use storyboard::{StoryboardError, StoryboardErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
pub use video::{VideoError, VideoErrorKind};

//! Test utilities for Adreel pipeline tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_client;

#[allow(unused_imports)]
pub use mock_client::{MockGenerationClient, PLACEHOLDER_URL, PreviewBehavior};

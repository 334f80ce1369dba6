//! Session orchestration for Adreel.
//!
//! The [`SessionStore`] wraps a [`Session`](adreel_core::Session) in a watch
//! channel so every mutation publishes a fresh snapshot to subscribers.  The
//! [`StoryboardPipeline`] drives a [`GenerationClient`](adreel_client::GenerationClient)
//! through the analyze, storyboard, preview and render phases, writing each
//! result into the store as it lands.  A [`ProgressTicker`] advances the
//! cosmetic render progress while a synthesis job is in flight.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod store;
mod ticker;

pub use pipeline::StoryboardPipeline;
pub use store::SessionStore;
pub use ticker::{ProgressTicker, TICK_INTERVAL_SECS};

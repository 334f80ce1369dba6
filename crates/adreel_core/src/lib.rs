//! Core data types for the Adreel promo-video pipeline.
//!
//! This crate provides the domain model shared across the Adreel workspace:
//! the brand kit, entity analysis, storyboard scenes, media references, and
//! per-run session state. Provider wire formats live in `adreel_client`;
//! the types here are the canonical in-memory representation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod brand;
mod media;
mod scene;
mod session;
mod storyboard;

pub use analysis::{Analysis, Mood};
pub use brand::{BrandKit, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
pub use media::MediaRef;
pub use scene::{Scene, SceneKind};
pub use session::{
    RENDER_START_PROGRESS, RENDER_TICK_CAP, RENDER_TICK_STEP, Session, Stage, VideoState,
};
pub use storyboard::{SCENE_COUNT, Storyboard, TARGET_DURATIONS_SECS, TARGET_TOTAL_SECS};

//! Storyboard scene types.

use crate::MediaRef;
use serde::{Deserialize, Serialize};

/// Functional role of a scene inside the fixed four-act storyboard.
///
/// # Examples
///
/// ```
/// use adreel_core::SceneKind;
///
/// let kind: SceneKind = serde_json::from_str("\"CTA\"").unwrap();
/// assert_eq!(kind, SceneKind::Cta);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SceneKind {
    /// Attention-grabbing opener
    Hook,
    /// The product presented as the answer
    Solution,
    /// Concrete benefit for the audience
    Benefit,
    /// Closing call to action
    Cta,
}

/// A single scene of the storyboard.
///
/// `preview` is absent until the preview pass reaches the scene; absence
/// means pending, never failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene ordinal, 1 through 4
    pub id: u8,
    /// Functional role in the storyboard
    pub kind: SceneKind,
    /// Planned duration in seconds
    pub duration_secs: f32,
    /// Voice-over narrative
    pub narrative: String,
    /// Visual generation prompt
    pub visual_prompt: String,
    /// Camera direction
    pub camera_angle: String,
    /// Preview still for the scene
    pub preview: Option<MediaRef>,
}

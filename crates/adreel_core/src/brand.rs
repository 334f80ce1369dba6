//! Brand kit carried through a generation run.

use crate::MediaRef;
use serde::{Deserialize, Serialize};

/// Default primary brand color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#8b5cf6";

/// Default secondary brand color.
pub const DEFAULT_SECONDARY_COLOR: &str = "#ffffff";

/// Brand identity applied to every generated scene.
///
/// The kit is fixed when a run starts and read-only afterward; the primary
/// color is woven into each scene's visual prompt.
///
/// # Examples
///
/// ```
/// use adreel_core::BrandKit;
///
/// let kit = BrandKit::default();
/// assert_eq!(kit.primary_color, "#8b5cf6");
///
/// let custom = BrandKit::new("#0ea5e9", "#f8fafc");
/// assert_eq!(custom.secondary_color, "#f8fafc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandKit {
    /// Primary brand color as a hex string
    pub primary_color: String,
    /// Secondary brand color as a hex string
    pub secondary_color: String,
    /// Optional logo asset
    pub logo: Option<MediaRef>,
}

impl BrandKit {
    /// Build a kit from primary and secondary colors, without a logo.
    pub fn new(primary_color: impl Into<String>, secondary_color: impl Into<String>) -> Self {
        Self {
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            logo: None,
        }
    }
}

impl Default for BrandKit {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR)
    }
}

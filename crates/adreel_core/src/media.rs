//! Media asset references.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Reference to a generated media asset.
///
/// Assets are either remote (`Url`) or carried inline as raw bytes with a
/// MIME type. [`MediaRef::to_data_uri`] renders either form as a string a
/// viewer can open directly.
///
/// # Examples
///
/// ```
/// use adreel_core::MediaRef;
///
/// let remote = MediaRef::Url("https://example.com/still.png".to_string());
/// assert_eq!(remote.to_data_uri(), "https://example.com/still.png");
///
/// let inline = MediaRef::inline("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert!(inline.to_data_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaRef {
    /// Remote asset address
    Url(String),
    /// Inline asset bytes
    Inline {
        /// MIME type, e.g. `image/png`
        mime: String,
        /// Raw asset bytes
        data: Vec<u8>,
    },
}

impl MediaRef {
    /// Build an inline reference from a MIME type and raw bytes.
    pub fn inline(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Inline {
            mime: mime.into(),
            data,
        }
    }

    /// True when the asset is carried inline.
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    /// Render the reference as a URI.
    ///
    /// URLs pass through unchanged; inline assets become
    /// `data:<mime>;base64,<payload>`.
    pub fn to_data_uri(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { mime, data } => {
                format!("data:{};base64,{}", mime, STANDARD.encode(data))
            }
        }
    }
}

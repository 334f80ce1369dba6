//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, StateError, StoryboardError, ValidationError, VideoError};

/// Aggregate error enum covering every pipeline stage.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelError, ValidationError, ValidationErrorKind};
///
/// let v_err = ValidationError::new(ValidationErrorKind::EmptyInput);
/// let err: AdreelError = v_err.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AdreelErrorKind {
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Entity analysis error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Storyboard expansion error
    #[from(StoryboardError)]
    Storyboard(StoryboardError),
    /// Video synthesis error
    #[from(VideoError)]
    Video(VideoError),
    /// Session state transition error
    #[from(StateError)]
    State(StateError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Adreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelResult, StateError, StateErrorKind};
///
/// fn might_fail() -> AdreelResult<()> {
///     Err(StateError::new(StateErrorKind::NoStoryboard))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Adreel Error: {}", _0)]
pub struct AdreelError(Box<AdreelErrorKind>);

impl AdreelError {
    /// Create a new error from a kind.
    pub fn new(kind: AdreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AdreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AdreelErrorKind
impl<T> From<T> for AdreelError
where
    T: Into<AdreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Adreel operations.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelResult, VideoError, VideoErrorKind};
///
/// fn fetch_asset() -> AdreelResult<String> {
///     Err(VideoError::new(VideoErrorKind::MissingAsset))?
/// }
/// ```
pub type AdreelResult<T> = std::result::Result<T, AdreelError>;

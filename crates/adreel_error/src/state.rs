//! Session state transition error types.

/// Specific error conditions for session state mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StateErrorKind {
    /// Scene id does not exist in the current storyboard
    #[display("Scene id {} is out of range for the current storyboard", _0)]
    SceneOutOfRange(u8),
    /// Scene already carries a preview still
    #[display("Scene id {} already has a preview", _0)]
    PreviewAlreadySet(u8),
    /// Operation requires a storyboard that has not been produced yet
    #[display("Session has no storyboard yet")]
    NoStoryboard,
}

/// State error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("State Error: {} at line {} in {}", kind, line, file)]
pub struct StateError {
    /// The specific error condition
    pub kind: StateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StateError {
    /// Create a new StateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

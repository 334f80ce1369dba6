//! Storyboard expansion error types.

/// Specific error conditions for the storyboard expansion stage.
///
/// The structural kinds (`SceneCount`, `MissingSceneId`, `DuplicateSceneId`,
/// `CtaCount`) cover responses that parsed as JSON but violate the fixed
/// 4-scene contract: ids `{1,2,3,4}` with exactly one CTA scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryboardErrorKind {
    /// Request to the provider failed before a response was received
    #[display("Storyboard request failed: {}", _0)]
    Request(String),
    /// Provider returned a non-success HTTP status
    #[display("Storyboard HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// Provider response carried no usable text payload
    #[display("Provider returned no storyboard payload")]
    EmptyResponse,
    /// Provider payload could not be parsed into a scene list
    #[display("Malformed storyboard payload: {}", _0)]
    MalformedPayload(String),
    /// Scene list has the wrong length
    #[display("Storyboard must have {} scenes, got {}", expected, actual)]
    SceneCount {
        /// Required scene count
        expected: usize,
        /// Count actually returned
        actual: usize,
    },
    /// A required scene ordinal is absent
    #[display("Storyboard is missing scene id {}", _0)]
    MissingSceneId(u8),
    /// A scene ordinal appears more than once
    #[display("Storyboard has duplicate scene id {}", _0)]
    DuplicateSceneId(u8),
    /// Wrong number of call-to-action scenes
    #[display("Storyboard must have exactly one CTA scene, got {}", _0)]
    CtaCount(usize),
}

/// Storyboard error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {} at line {} in {}", kind, line, file)]
pub struct StoryboardError {
    /// The specific error condition
    pub kind: StoryboardErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryboardError {
    /// Create a new StoryboardError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryboardErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

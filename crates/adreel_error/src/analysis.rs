//! Entity analysis error types.

/// Specific error conditions for the entity analysis stage.
///
/// Analysis errors are fatal to the current run: the session is left
/// without analysis, scenes, or video state, and the caller may start a
/// fresh run with the same or corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// Request to the provider failed before a response was received
    #[display("Analysis request failed: {}", _0)]
    Request(String),
    /// Provider returned a non-success HTTP status
    #[display("Analysis HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// Provider response carried no usable text payload
    #[display("Provider returned no analysis payload")]
    EmptyResponse,
    /// Provider payload could not be parsed into an entity analysis
    #[display("Malformed analysis payload: {}", _0)]
    MalformedPayload(String),
}

/// Analysis error with source location tracking.
///
/// # Examples
///
/// ```
/// use adreel_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no analysis payload"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The specific error condition
    pub kind: AnalysisErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

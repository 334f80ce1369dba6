//! Video synthesis error types.

/// Specific error conditions for asynchronous video synthesis.
///
/// Video generation is a submit-then-poll protocol, so failures split into
/// submission errors, job-level failures reported by the provider, and
/// problems retrieving the finished asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VideoErrorKind {
    /// Job submission failed before an operation handle was returned
    #[display("Video job submission failed: {}", _0)]
    Submit(String),
    /// Status poll for a running job failed
    #[display("Video operation poll failed: {}", _0)]
    Poll(String),
    /// Provider returned a non-success HTTP status
    #[display("Video HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// Provider reported the job itself as failed
    #[display("Video job failed: {}", _0)]
    JobFailed(String),
    /// Job completed but the response carried no video asset
    #[display("Video job completed without a video asset")]
    MissingAsset,
    /// Finished asset could not be downloaded
    #[display("Video download failed: {}", _0)]
    Download(String),
    /// Operation response could not be parsed
    #[display("Malformed video operation payload: {}", _0)]
    MalformedPayload(String),
}

/// Video error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Error: {} at line {} in {}", kind, line, file)]
pub struct VideoError {
    /// The specific error condition
    pub kind: VideoErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VideoError {
    /// Create a new VideoError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

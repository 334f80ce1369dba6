//! Configuration error types.

/// Specific error conditions for loading generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Required API key is absent from the environment
    #[display("Missing environment variable: {}", _0)]
    MissingApiKey(String),
    /// Configuration sources could not be read
    #[display("Config load failed: {}", _0)]
    Load(String),
    /// Configuration file contents could not be deserialized
    #[display("Config parse failed: {}", _0)]
    Parse(String),
}

/// Configuration error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

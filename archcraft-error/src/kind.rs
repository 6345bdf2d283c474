//! Error kinds for archcraft operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on the kind to decide whether a failure stops the process
/// (configuration) or only the current query (everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration value
    ConfigInvalid,

    /// The API credential is absent or still the placeholder value
    CredentialMissing,

    // =========================================================================
    // Agent service errors
    // =========================================================================
    /// The agent run failed on the service side
    InferenceFailed,

    /// Service is down or overloaded
    ProviderUnavailable,

    /// Rate limit exceeded
    RateLimited,

    /// The service rejected the credential
    AuthenticationFailed,

    /// Transport-level failure (connect, timeout, reset)
    NetworkFailed,

    /// Response body could not be decoded
    ParseFailed,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Appending a record to the transcript failed
    TranscriptFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            // General
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::CredentialMissing => "CredentialMissing",

            // Agent service
            ErrorKind::InferenceFailed => "InferenceFailed",
            ErrorKind::ProviderUnavailable => "ProviderUnavailable",
            ErrorKind::RateLimited => "RateLimited",
            ErrorKind::AuthenticationFailed => "AuthenticationFailed",
            ErrorKind::NetworkFailed => "NetworkFailed",
            ErrorKind::ParseFailed => "ParseFailed",

            // IO
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::TranscriptFailed => "TranscriptFailed",
        }
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::InferenceFailed
                | ErrorKind::NetworkFailed
                | ErrorKind::RateLimited
                | ErrorKind::ProviderUnavailable
        )
    }

    /// Whether this kind must stop the process before the session starts
    pub fn is_configuration(&self) -> bool {
        matches!(self, ErrorKind::ConfigInvalid | ErrorKind::CredentialMissing)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! The main Error type for archcraft

use crate::{ErrorKind, ErrorStatus};
use std::fmt;

/// The unified error type for all archcraft operations.
///
/// Carries the kind, a human-readable message, the operation that failed,
/// key/value context and an optional source. The status shown next to the
/// kind is derived from the kind.
///
/// # Example
///
/// ```rust
/// use archcraft_error::{Error, ErrorKind, ErrorStatus};
///
/// let err = Error::new(ErrorKind::RateLimited, "too many requests")
///     .with_operation("openai::run")
///     .with_context("retry_after", "20");
///
/// assert_eq!(err.kind(), ErrorKind::RateLimited);
/// assert_eq!(err.status(), ErrorStatus::Temporary);
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from(self.kind)
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the operation that caused this error.
    ///
    /// A previously set operation is kept in context as "called".
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.status().is_retryable()
    }
}

// =============================================================================
// Display - compact, single-line format for logs and transcripts
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.status())?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.status(), self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    pub fn config_invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(ErrorKind::ConfigInvalid, reason).with_context("key", key)
    }

    /// The credential named `var` is unset or still a placeholder
    pub fn credential_missing(var: impl Into<String>, message: impl Into<String>) -> Self {
        let var = var.into();
        Self::new(ErrorKind::CredentialMissing, message).with_context("variable", var)
    }

    pub fn inference_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InferenceFailed, message)
    }

    pub fn network_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkFailed, message)
    }

    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    /// Appending to the transcript at `path` failed
    pub fn transcript_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(ErrorKind::TranscriptFailed, reason).with_context("path", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::AuthenticationFailed, "invalid api key");
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
        assert_eq!(err.message(), "invalid api key");
        assert_eq!(err.status(), ErrorStatus::Permanent);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::InferenceFailed, "run failed")
            .with_operation("openai::run")
            .with_context("model", "gpt-5.2-2025-12-11")
            .with_context("status", "500");

        assert_eq!(err.operation(), "openai::run");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("model", "gpt-5.2-2025-12-11".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::IoFailed, "write failed")
            .with_operation("transcript::append")
            .with_operation("session::record");

        assert_eq!(err.operation(), "session::record");
        assert_eq!(err.context()[0], ("called", "transcript::append".to_string()));
    }

    #[test]
    fn test_default_status_follows_kind() {
        assert!(Error::network_failed("timeout").is_retryable());
        assert!(!Error::credential_missing("OPENAI_API_KEY", "unset").is_retryable());
        assert_eq!(Error::parse_failed("bad json").status(), ErrorStatus::Permanent);
    }

    #[test]
    fn test_display_embeds_message() {
        let err = Error::network_failed("timeout")
            .with_operation("openai::run")
            .with_context("model", "gpt-5.2-2025-12-11");

        let display = err.to_string();
        assert!(display.contains("NetworkFailed"));
        assert!(display.contains("temporary"));
        assert!(display.contains("openai::run"));
        assert!(display.contains("model: gpt-5.2-2025-12-11"));
        assert!(display.ends_with("=> timeout"));
    }

    #[test]
    fn test_display_without_operation() {
        let err = Error::unexpected("boom");
        assert_eq!(err.to_string(), "Unexpected (permanent) => boom");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_transcript_failed_context() {
        let err = Error::transcript_failed("/tmp/Results.md", "disk full");
        assert_eq!(err.kind(), ErrorKind::TranscriptFailed);
        assert_eq!(err.context()[0], ("path", "/tmp/Results.md".to_string()));
    }
}

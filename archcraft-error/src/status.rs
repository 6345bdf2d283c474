//! Error status - whether a failed query could succeed if asked again

use crate::ErrorKind;
use std::fmt;

/// Transient or not, as reported to the user alongside the kind.
///
/// Derived from the kind alone. Sessions never retry on their own; the
/// status only tells the user whether asking again is worthwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    /// Asking again will fail the same way
    Permanent,
    /// Rate limits, outages, dropped connections
    Temporary,
}

impl ErrorStatus {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
        }
    }
}

impl From<ErrorKind> for ErrorStatus {
    fn from(kind: ErrorKind) -> Self {
        if kind.is_retryable() {
            ErrorStatus::Temporary
        } else {
            ErrorStatus::Permanent
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_kind() {
        assert_eq!(ErrorStatus::from(ErrorKind::RateLimited), ErrorStatus::Temporary);
        assert_eq!(ErrorStatus::from(ErrorKind::CredentialMissing), ErrorStatus::Permanent);
        assert_eq!(ErrorStatus::from(ErrorKind::TranscriptFailed).to_string(), "permanent");
    }
}

//! The result of dispatching one query

use archcraft_agent::RunResult;
use archcraft_error::Result;
use std::fmt;

/// Which kind of block a transcript record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeLabel {
    Result,
    Error,
}

impl OutcomeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeLabel::Result => "Result",
            OutcomeLabel::Error => "Error",
        }
    }
}

impl fmt::Display for OutcomeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display text for a query, tagged success or failure.
///
/// Both arms are printed and recorded the same way; only the label differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    /// Fold a run into display text. Errors become `Failure` with a readable message.
    pub fn from_run(run: Result<RunResult>) -> Self {
        match run {
            Ok(result) => Outcome::Success(result.display_text().into_owned()),
            Err(err) => Outcome::Failure(format!("Error processing query: {}", err)),
        }
    }

    pub fn label(&self) -> OutcomeLabel {
        match self {
            Outcome::Success(_) => OutcomeLabel::Result,
            Outcome::Failure(_) => OutcomeLabel::Error,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

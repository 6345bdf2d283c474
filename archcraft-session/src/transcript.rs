//! # Transcript
//!
//! Append-only markdown log of every query and its outcome. Each record is
//!
//! ```text
//! ## Query:
//! <query>
//! ---
//! ## Result:        (or "## Error:")
//! <text>
//! ---
//! ```
//!
//! Every append opens the file, writes one record and closes it again, so a
//! crash between appends loses nothing already written. Existing bytes are
//! never rewritten.

use crate::outcome::OutcomeLabel;
use archcraft_error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. Failures are returned, not retried.
    pub fn append(&self, query: &str, label: OutcomeLabel, text: &str) -> Result<()> {
        let record = format_record(query, label, text);

        // The handle is dropped on every path out of this function.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_failure("failed to open transcript", e))?;

        file.write_all(record.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.io_failure("failed to write transcript", e))
    }

    fn io_failure(&self, what: &str, err: std::io::Error) -> Error {
        Error::transcript_failed(self.path.display().to_string(), format!("{}: {}", what, err))
            .with_operation("transcript::append")
            .set_source(err)
    }
}

fn format_record(query: &str, label: OutcomeLabel, text: &str) -> String {
    format!("## Query:\n{}\n---\n## {}:\n{}\n---\n", query, label, text)
}

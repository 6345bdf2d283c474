//! Line input for the session

use archcraft_error::{Error, ErrorKind, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of text, without its terminator
    Text(String),
    /// Ctrl-C: the current line was discarded
    Interrupted,
    /// Ctrl-D or closed input
    Eof,
}

/// Source of interactive input lines
pub trait LineReader {
    /// Show `prompt` and block until the user submits a line
    fn read_line(&mut self, prompt: &str) -> Result<Line>;

    /// Called with each query that was dispatched
    fn remember(&mut self, _query: &str) {}
}

/// Terminal reader with line editing and in-memory history
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| {
            Error::new(ErrorKind::IoFailed, format!("failed to initialise line editor: {}", e))
                .with_operation("input::new")
        })?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(Error::new(ErrorKind::IoFailed, format!("failed to read input: {}", e))
                .with_operation("input::read_line")),
        }
    }

    fn remember(&mut self, query: &str) {
        // History is a convenience; a rejected entry changes nothing.
        let _ = self.editor.add_history_entry(query);
    }
}

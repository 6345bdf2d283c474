//! Agent run results

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// One item the agent produced while answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputItem {
    /// Assistant text
    Message { text: String },
    /// The agent searched the web
    WebSearchCall { status: Option<String>, query: Option<String> },
    /// The agent ran code in its sandbox
    CodeInterpreterCall { status: Option<String>, code: Option<String> },
    /// Anything else the service reported (reasoning, future item types)
    Other { kind: String },
}

impl OutputItem {
    pub fn kind(&self) -> &str {
        match self {
            Self::Message { .. } => "message",
            Self::WebSearchCall { .. } => "web_search_call",
            Self::CodeInterpreterCall { .. } => "code_interpreter_call",
            Self::Other { kind } => kind.as_str(),
        }
    }
}

/// Token usage for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub total_tokens: usize,
}

/// The outcome of running the agent on a single query
#[derive(Debug, Clone)]
pub struct RunResult {
    pub agent_name: String,
    pub response_id: String,
    pub model: String,
    pub status: Option<String>,
    pub items: Vec<OutputItem>,
    pub usage: Usage,
    /// Why the run stopped early, when the service says it did
    pub incomplete_reason: Option<String>,
}

impl RunResult {
    /// Text of the last assistant message, if it has any non-blank text
    pub fn final_output(&self) -> Option<&str> {
        self.items
            .iter()
            .rev()
            .find_map(|item| match item {
                OutputItem::Message { text } => Some(text.as_str()),
                _ => None,
            })
            .filter(|text| !text.trim().is_empty())
    }

    /// What to show the user: the final output, else the whole result rendered.
    ///
    /// Never fails and never returns an empty string.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self.final_output() {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(self.to_string()),
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RunResult:")?;
        writeln!(f, "- Agent: {}", self.agent_name)?;
        writeln!(f, "- Response: {} ({})", self.response_id, self.model)?;
        writeln!(f, "- Status: {}", self.status.as_deref().unwrap_or("unknown"))?;
        if let Some(reason) = &self.incomplete_reason {
            writeln!(f, "- Incomplete: {}", reason)?;
        }
        match self.final_output() {
            Some(text) => writeln!(f, "- Final output: {}", text)?,
            None => writeln!(f, "- Final output: None")?,
        }
        write!(f, "- {} output item(s)", self.items.len())?;
        if !self.items.is_empty() {
            let kinds: Vec<&str> = self.items.iter().map(OutputItem::kind).collect();
            write!(f, ": {}", kinds.join(", "))?;
        }
        writeln!(f)?;
        write!(
            f,
            "- Usage: {} input, {} output, {} total tokens",
            self.usage.input_tokens, self.usage.output_tokens, self.usage.total_tokens
        )
    }
}

/// Tracks token usage across multiple runs
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    pub total_runs: usize,
    pub total_input_tokens: usize,
    pub total_output_tokens: usize,
    pub by_model: HashMap<String, Usage>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, model: &str, usage: &Usage) {
        self.total_runs += 1;
        self.total_input_tokens += usage.input_tokens;
        self.total_output_tokens += usage.output_tokens;

        let entry = self.by_model.entry(model.to_string()).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
        entry.total_tokens += usage.total_tokens;
    }

    pub fn total_tokens(&self) -> usize {
        self.total_input_tokens + self.total_output_tokens
    }
}

//! Session loop - prompt, dispatch, print, record

use crate::input::{Line, LineReader};
use crate::outcome::Outcome;
use crate::state::{SessionState, Step};
use crate::transcript::Transcript;
use archcraft_agent::{AgentDefinition, AgentRunner, UsageTracker};
use archcraft_error::Result;
use std::io::Write;
use tracing::{debug, error, info, warn};

pub const QUERY_PROMPT: &str = "Enter a query for the agent (or 'quit' to exit): ";
pub const CONFIRM_PROMPT: &str = "Are you sure you want to quit? (yes/no): ";

/// Counters for a finished (or running) session
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    /// Queries dispatched to the agent
    pub queries: usize,
    /// Queries whose run failed
    pub failures: usize,
    /// Records that could not be written to the transcript
    pub transcript_failures: usize,
    /// Outcomes that could not be written to the console
    pub console_failures: usize,
    pub usage: UsageTracker,
}

/// An interactive session with one agent.
///
/// Strictly sequential: a line is read, its query (if any) runs to
/// completion, the outcome is printed and recorded, then the next prompt is
/// shown.
pub struct Session<'a, R, L, W> {
    agent: &'a AgentDefinition,
    runner: R,
    reader: L,
    console: W,
    transcript: Transcript,
    state: SessionState,
    summary: SessionSummary,
}

impl<'a, R, L, W> Session<'a, R, L, W>
where
    R: AgentRunner,
    L: LineReader,
    W: Write,
{
    pub fn new(agent: &'a AgentDefinition, runner: R, reader: L, console: W, transcript: Transcript) -> Self {
        Self {
            agent,
            runner,
            reader,
            console,
            transcript,
            state: SessionState::Running,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    /// Run until the user confirms `quit` or input ends.
    ///
    /// Query, transcript and console failures never end the loop. Only a
    /// failure to read input is returned as an error.
    pub async fn run(&mut self) -> Result<&SessionSummary> {
        info!(
            agent = %self.agent.name,
            model = %self.agent.model,
            runner = self.runner.name(),
            transcript = %self.transcript.path().display(),
            "session started"
        );

        loop {
            let prompt = match self.state {
                SessionState::Running => QUERY_PROMPT,
                SessionState::AwaitingExitConfirmation => CONFIRM_PROMPT,
                SessionState::Terminated => break,
            };

            let line = match self.reader.read_line(prompt)? {
                Line::Text(line) => line,
                Line::Interrupted => continue,
                Line::Eof => {
                    debug!("input closed");
                    self.state = self.state.on_end_of_input();
                    continue;
                }
            };

            let (next, step) = self.state.on_input(&line);
            self.state = next;

            if let Step::Dispatch(query) = step {
                self.reader.remember(&query);
                let outcome = self.dispatch(&query).await;
                self.emit(&query, &outcome);
            }
        }

        info!(
            queries = self.summary.queries,
            failures = self.summary.failures,
            total_tokens = self.summary.usage.total_tokens(),
            "session ended"
        );
        Ok(&self.summary)
    }

    /// Run the agent on one query; every error becomes `Outcome::Failure`
    pub async fn dispatch(&mut self, query: &str) -> Outcome {
        self.summary.queries += 1;

        let run = self.runner.run(self.agent, query).await;
        match &run {
            Ok(result) => self.summary.usage.track(&result.model, &result.usage),
            Err(err) => {
                self.summary.failures += 1;
                warn!(error = %err, "query failed");
            }
        }

        Outcome::from_run(run)
    }

    /// Print the outcome and append it to the transcript
    fn emit(&mut self, query: &str, outcome: &Outcome) {
        let mut printed = writeln!(self.console, "{}", outcome.text());

        if let Err(err) = self.transcript.append(query, outcome.label(), outcome.text()) {
            self.summary.transcript_failures += 1;
            error!(error = %err, "transcript append failed");
            printed = printed.and_then(|_| {
                writeln!(self.console, "Warning: this query was not recorded in the transcript: {}", err)
            });
        }

        if let Err(err) = printed.and_then(|_| self.console.flush()) {
            self.summary.console_failures += 1;
            warn!(error = %err, "console write failed");
        }
    }
}

//! # archcraft Session
//!
//! The interactive loop around the agent:
//! 1. Read a line from the user
//! 2. `quit` asks for confirmation, `yes` ends the session
//! 3. Anything else is a query: run the agent, print the answer
//! 4. Append the query and its result (or error) to the transcript
//!
//! A failed query is reported and recorded like any other; it never ends
//! the session.

mod input;
mod outcome;
mod session;
mod state;
mod transcript;

pub use input::{EditorReader, Line, LineReader};
pub use outcome::{Outcome, OutcomeLabel};
pub use session::{Session, SessionSummary, CONFIRM_PROMPT, QUERY_PROMPT};
pub use state::{SessionState, Step, AFFIRMATIVE_TOKEN, EXIT_KEYWORD};
pub use transcript::Transcript;

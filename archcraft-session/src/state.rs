//! Session state machine

pub const EXIT_KEYWORD: &str = "quit";
pub const AFFIRMATIVE_TOKEN: &str = "yes";

/// Where the session is in its exit protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting queries
    Running,
    /// `quit` was entered; the next line decides
    AwaitingExitConfirmation,
    /// Done, no more prompts
    Terminated,
}

/// What the loop should do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Send this query to the agent
    Dispatch(String),
    /// Nothing to run; prompt again
    Continue,
}

impl SessionState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }

    /// Apply one line of input.
    ///
    /// Keyword matches are ASCII case-insensitive against the whole line.
    /// Only the empty line is not a query; whitespace is sent as typed.
    /// While awaiting confirmation every input other than `yes` (including
    /// empty input and `quit` again) returns to `Running`.
    pub fn on_input(self, line: &str) -> (SessionState, Step) {
        match self {
            SessionState::Running => {
                if line.eq_ignore_ascii_case(EXIT_KEYWORD) {
                    (SessionState::AwaitingExitConfirmation, Step::Continue)
                } else if line.is_empty() {
                    (SessionState::Running, Step::Continue)
                } else {
                    (SessionState::Running, Step::Dispatch(line.to_string()))
                }
            }
            SessionState::AwaitingExitConfirmation => {
                if line.eq_ignore_ascii_case(AFFIRMATIVE_TOKEN) {
                    (SessionState::Terminated, Step::Continue)
                } else {
                    (SessionState::Running, Step::Continue)
                }
            }
            SessionState::Terminated => (SessionState::Terminated, Step::Continue),
        }
    }

    /// Input is exhausted; nothing more can be asked
    pub fn on_end_of_input(self) -> SessionState {
        SessionState::Terminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_running() {
        let (state, step) = SessionState::Running.on_input("optimize a sort");
        assert_eq!(state, SessionState::Running);
        assert_eq!(step, Step::Dispatch("optimize a sort".into()));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        for word in ["quit", "QUIT", "Quit", "qUiT"] {
            let (state, step) = SessionState::Running.on_input(word);
            assert_eq!(state, SessionState::AwaitingExitConfirmation);
            assert_eq!(step, Step::Continue);
        }
    }

    #[test]
    fn test_quit_must_match_whole_line() {
        let (state, step) = SessionState::Running.on_input("quit now");
        assert_eq!(state, SessionState::Running);
        assert_eq!(step, Step::Dispatch("quit now".into()));
    }

    #[test]
    fn test_confirm_yes_terminates() {
        for word in ["yes", "YES", "Yes"] {
            let (state, _) = SessionState::AwaitingExitConfirmation.on_input(word);
            assert!(state.is_terminated());
        }
    }

    #[test]
    fn test_anything_else_abandons_exit() {
        for word in ["no", "", "y", "quit", "yes please"] {
            let (state, step) = SessionState::AwaitingExitConfirmation.on_input(word);
            assert_eq!(state, SessionState::Running);
            assert_eq!(step, Step::Continue);
        }
    }

    #[test]
    fn test_empty_input_is_not_a_query() {
        let (state, step) = SessionState::Running.on_input("");
        assert_eq!(state, SessionState::Running);
        assert_eq!(step, Step::Continue);
    }

    #[test]
    fn test_whitespace_input_is_a_query() {
        let (state, step) = SessionState::Running.on_input("   ");
        assert_eq!(state, SessionState::Running);
        assert_eq!(step, Step::Dispatch("   ".into()));
    }

    #[test]
    fn test_terminated_is_terminal() {
        let (state, step) = SessionState::Terminated.on_input("hello");
        assert_eq!(state, SessionState::Terminated);
        assert_eq!(step, Step::Continue);
        assert!(SessionState::Running.on_end_of_input().is_terminated());
    }
}

//! Errors reported by the solver to its caller

use crate::core::FeedbackError;
use std::fmt;

/// Conditions the caller must surface instead of the solver papering over them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Feedback was malformed; the session is unchanged and the caller
    /// should ask again
    InvalidFeedback(FeedbackError),
    /// No code is consistent with the recorded history; some earlier
    /// feedback was entered wrongly
    InconsistentHistory { moves: usize },
    /// The move ceiling was reached without a win
    SessionExhausted { moves: usize },
    /// The session is already Won or Exhausted
    GameFinished,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::InconsistentHistory { moves } => write!(
                f,
                "No code matches the feedback after {moves} moves; check earlier answers"
            ),
            Self::SessionExhausted { moves } => {
                write!(f, "No win after {moves} moves; start a new game")
            }
            Self::GameFinished => write!(f, "This game is already over"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SolverError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

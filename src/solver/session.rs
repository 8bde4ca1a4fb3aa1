//! Game session state
//!
//! A session is an immutable value: every transition returns a new session
//! and leaves the old one usable, so callers can branch or roll back freely.

use crate::core::{Code, FeedbackRule, Response, filter, universe};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No guess chosen yet
    NotStarted,
    /// A guess has been chosen and its feedback is outstanding
    AwaitingFeedback,
    /// Feedback recorded; the next guess is up
    AwaitingNextGuess,
    /// The last feedback was all Correct
    Won,
    /// No candidate survives the recorded history
    Exhausted,
}

impl GameStatus {
    /// Whether no further moves can be made
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// Guesses, their feedback, and the candidates still consistent with both
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    rule: FeedbackRule,
    guesses: Vec<Code>,
    responses: Vec<Response>,
    candidates: Vec<Code>,
    pending: Option<Code>,
}

impl GameSession {
    /// Fresh game over the full universe
    #[must_use]
    pub fn new(rule: FeedbackRule) -> Self {
        Self {
            rule,
            guesses: Vec::new(),
            responses: Vec::new(),
            candidates: universe().to_vec(),
            pending: None,
        }
    }

    /// Replay a whole history from the universe
    #[must_use]
    pub fn from_history(rule: FeedbackRule, history: &[(Code, Response)]) -> Self {
        history
            .iter()
            .fold(Self::new(rule), |session, &(guess, response)| {
                session.record(guess, response)
            })
    }

    /// Mark `guess` as played and awaiting feedback
    #[must_use]
    pub fn choose(&self, guess: Code) -> Self {
        Self {
            pending: Some(guess),
            ..self.clone()
        }
    }

    /// Append a move and narrow the candidates
    ///
    /// Never fails: an empty result shows up as [`GameStatus::Exhausted`].
    /// Any pending guess is replaced by `guess`.
    #[must_use]
    pub fn record(&self, guess: Code, response: impl Into<Response>) -> Self {
        let response = response.into();
        let mut guesses = self.guesses.clone();
        let mut responses = self.responses.clone();
        guesses.push(guess);
        responses.push(response);

        Self {
            rule: self.rule,
            guesses,
            responses,
            candidates: filter(self.rule, &self.candidates, guess, response),
            pending: None,
        }
    }

    /// Drop the last move, re-deriving candidates from the universe
    ///
    /// A pending guess is dropped first if there is one. Returns `None` for a
    /// session with nothing to undo.
    #[must_use]
    pub fn undo(&self) -> Option<Self> {
        if self.pending.is_some() {
            return Some(Self {
                pending: None,
                ..self.clone()
            });
        }

        let keep = self.guesses.len().checked_sub(1)?;
        let history: Vec<(Code, Response)> = self.history().take(keep).collect();
        Some(Self::from_history(self.rule, &history))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.responses.last().is_some_and(|r| r.is_perfect()) {
            GameStatus::Won
        } else if self.candidates.is_empty() {
            GameStatus::Exhausted
        } else if self.pending.is_some() {
            GameStatus::AwaitingFeedback
        } else if self.guesses.is_empty() {
            GameStatus::NotStarted
        } else {
            GameStatus::AwaitingNextGuess
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    #[must_use]
    pub const fn rule(&self) -> FeedbackRule {
        self.rule
    }

    /// Number of guesses with recorded feedback
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.guesses.len()
    }

    /// Candidates consistent with every recorded move, ascending
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    #[must_use]
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    #[must_use]
    pub const fn pending_guess(&self) -> Option<Code> {
        self.pending
    }

    /// Whether `code` is still a candidate
    #[must_use]
    pub fn is_candidate(&self, code: Code) -> bool {
        self.candidates.binary_search(&code).is_ok()
    }

    /// (guess, response) pairs in play order
    pub fn history(&self) -> impl Iterator<Item = (Code, Response)> + '_ {
        self.guesses
            .iter()
            .copied()
            .zip(self.responses.iter().copied())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(FeedbackRule::default())
    }
}

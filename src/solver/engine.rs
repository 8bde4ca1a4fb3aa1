//! Main Mastermind solver interface

use super::config::SolverConfig;
use super::entropy::{GuessMetrics, calculate_metrics};
use super::error::SolverError;
use super::generator::OPENING_BOOK;
use super::ranker::{Suggestion, recommend};
use super::scorer::{ScoreCache, Scorer};
use super::session::GameSession;
use super::simulator::{WinDistribution, simulate};
use crate::core::{Code, Response, UNIVERSE_SIZE};
use rand::Rng;

/// Main Mastermind solver
///
/// Holds the configuration and the shared score cache. Sessions are plain
/// values passed in and returned; the solver never mutates one in place, so a
/// single solver can serve many games, including from several threads.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    cache: ScoreCache,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let cache = ScoreCache::new(config.cache_capacity);
        Self { config, cache }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fresh session under this solver's feedback rule
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        GameSession::new(self.config.rule)
    }

    /// Record feedback for `guess` and return the advanced session
    ///
    /// # Errors
    /// - [`SolverError::GameFinished`] if the session is already Won or Exhausted
    /// - [`SolverError::InconsistentHistory`] if no candidate survives
    /// - [`SolverError::SessionExhausted`] if the move ceiling is reached without a win
    pub fn submit(
        &self,
        session: &GameSession,
        guess: Code,
        response: impl Into<Response>,
    ) -> Result<GameSession, SolverError> {
        if session.is_over() {
            return Err(SolverError::GameFinished);
        }

        let next = session.record(guess, response);
        let moves = next.move_count();

        if next.candidates().is_empty() {
            return Err(SolverError::InconsistentHistory { moves });
        }
        if !next.status().is_over() && moves >= self.config.max_moves {
            return Err(SolverError::SessionExhausted { moves });
        }

        Ok(next)
    }

    /// Parse `feedback` in either per-slot or aggregate form, then [`submit`](Self::submit)
    ///
    /// # Errors
    /// [`SolverError::InvalidFeedback`] if the text does not parse, otherwise
    /// as for [`submit`](Self::submit).
    pub fn submit_str(
        &self,
        session: &GameSession,
        guess: Code,
        feedback: &str,
    ) -> Result<GameSession, SolverError> {
        let response: Response = feedback.trim().parse()?;
        self.submit(session, guess, response)
    }

    /// Ranked guesses for the session's next move
    #[must_use]
    pub fn recommend(&self, session: &GameSession, max_suggestions: usize) -> Vec<Suggestion> {
        recommend(&self.config, &self.cache, session, max_suggestions)
    }

    /// The single best next guess
    ///
    /// The first move of a game is always the first opening-book guess.
    /// Returns `None` if no candidates remain.
    #[must_use]
    pub fn next_guess(&self, session: &GameSession) -> Option<Code> {
        if session.candidates().is_empty() {
            return None;
        }
        if session.move_count() == 0 {
            return Some(OPENING_BOOK[0]);
        }
        self.recommend(session, 1).first().map(|s| s.guess)
    }

    /// The fixed first-move guesses
    #[must_use]
    pub const fn opening_guesses() -> &'static [Code] {
        &OPENING_BOOK
    }

    /// A uniformly random secret
    #[must_use]
    pub fn random_secret() -> Code {
        let index = rand::rng().random_range(0..UNIVERSE_SIZE as u16);
        Code::from_index(index)
    }

    /// Score `guess` against the session's candidates, lower is better
    #[must_use]
    pub fn score(&self, session: &GameSession, guess: Code) -> f64 {
        let scores = self
            .cache
            .score_pool(&self.scorer(session), &[guess], session.candidates());
        scores.first().copied().unwrap_or(0.0)
    }

    /// Winning-move distribution if `guess` is played next
    #[must_use]
    pub fn simulate(&self, session: &GameSession, guess: Code) -> WinDistribution {
        simulate(
            &self.scorer(session),
            guess,
            session.candidates(),
            session.move_count(),
            self.config.max_depth,
        )
    }

    /// Entropy, expected remaining and worst-case group size of `guess`
    #[must_use]
    pub fn metrics(&self, session: &GameSession, guess: Code) -> GuessMetrics {
        calculate_metrics(session.rule(), guess, session.candidates())
    }

    /// Entries currently held in the score cache
    #[must_use]
    pub fn cached_scores(&self) -> usize {
        self.cache.len()
    }

    fn scorer(&self, session: &GameSession) -> Scorer {
        Scorer {
            rule: session.rule(),
            ..Scorer::from_config(&self.config)
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

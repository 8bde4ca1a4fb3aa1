//! Solver tuning knobs
//!
//! Thresholds use `<=` comparisons against the current candidate count:
//! ```text
//! candidates <= entropy_threshold      → entropy scoring, else minimax
//! candidates <= synthesis_threshold    → synthesise digit-probing guesses
//! candidates >  spread_threshold       → inject the fixed spread guesses
//! candidates <= tiny_threshold         → endgame listing with safe guesses
//! candidates <= simulate_threshold     → attach win distributions
//! candidates <= show_all_below         → every candidate is always listed
//! ```

use crate::core::FeedbackRule;

/// Configuration for a [`Solver`](super::Solver)
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Feedback rule used for every evaluation (default: duplicate-aware)
    pub rule: FeedbackRule,

    /// Candidates <= this are scored by normalised entropy (default: 10)
    pub entropy_threshold: usize,

    /// Prefix of the candidate list put in the guess pool when it is large (default: 50)
    pub candidate_sample: usize,

    /// Candidates <= this get synthesised probing guesses (default: 10)
    pub synthesis_threshold: usize,

    /// Candidates > this get the fixed spread guesses (default: 100)
    pub spread_threshold: usize,

    /// Candidates <= this use the endgame listing (default: 3)
    pub tiny_threshold: usize,

    /// Candidates <= this get win distributions attached (default: 20)
    pub simulate_threshold: usize,

    /// Recursion budget for the win-probability simulator (default: 3)
    pub max_depth: usize,

    /// Move ceiling after which a session is abandoned (default: 10)
    pub max_moves: usize,

    /// Minimax multiplier when a guess can yield two or more Correct slots
    /// (default: 0.8, 1.0 disables)
    pub lock_in_factor: f64,

    /// Score slack above the best for entropy-scored pools (default: 2.0)
    pub small_tolerance: f64,

    /// Score slack above the best for minimax pools, as a fraction of the
    /// best score (default: 0.5)
    pub large_tolerance_ratio: f64,

    /// Candidates <= this are all listed regardless of truncation (default: 5)
    pub show_all_below: usize,

    /// Extra separating guesses offered in the endgame (default: 2)
    pub safe_guesses: usize,

    /// Entries kept in the score cache before it is cleared (default: 200,000)
    pub cache_capacity: usize,
}

impl SolverConfig {
    /// Default configuration with a specific feedback rule
    #[must_use]
    pub fn with_rule(rule: FeedbackRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rule: FeedbackRule::DuplicateAware,
            entropy_threshold: 10,
            candidate_sample: 50,
            synthesis_threshold: 10,
            spread_threshold: 100,
            tiny_threshold: 3,
            simulate_threshold: 20,
            max_depth: 3,
            max_moves: 10,
            lock_in_factor: 0.8,
            small_tolerance: 2.0,
            large_tolerance_ratio: 0.5,
            show_all_below: 5,
            safe_guesses: 2,
            cache_capacity: 200_000,
        }
    }
}

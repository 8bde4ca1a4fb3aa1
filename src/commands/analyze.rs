//! Guess analysis command
//!
//! Analyzes how well a specific guess splits the current candidates.

use crate::core::Code;
use crate::solver::{GameSession, Solver, WinDistribution};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub score: f64,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub groups: usize,
    pub total_candidates: usize,
    pub is_candidate: bool,
    pub win: Option<WinDistribution>,
}

/// Analyze a guess against the candidates of `session`
///
/// The win distribution is only simulated for candidate sets small enough
/// for the solver to attach one to its own suggestions.
///
/// # Errors
///
/// Returns an error if the guess is not four digits or no candidates remain.
pub fn analyze_code(
    guess: &str,
    solver: &Solver,
    session: &GameSession,
) -> Result<AnalysisResult, String> {
    let guess: Code = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    let total_candidates = session.candidates().len();
    if total_candidates == 0 {
        return Err("No candidates remaining".to_string());
    }

    let metrics = solver.metrics(session, guess);
    let win = (total_candidates <= solver.config().simulate_threshold)
        .then(|| solver.simulate(session, guess));

    Ok(AnalysisResult {
        guess,
        score: solver.score(session, guess),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        groups: metrics.groups,
        total_candidates,
        is_candidate: session.is_candidate(guess),
        win,
    })
}

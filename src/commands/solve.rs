//! Code solving command
//!
//! Plays the solver against a known secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::Solver;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
    /// Played as the first guess instead of the solver's choice
    pub first_guess: Option<Code>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
            first_guess: None,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not four digits
/// - The solver runs out of candidates
pub fn solve_code(config: SolveConfig, solver: &Solver) -> Result<SolveResult, String> {
    let secret: Code = config
        .secret
        .parse()
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    let guesses = play_game(solver, secret, config.max_guesses, config.first_guess)?;
    let success = guesses.last().is_some_and(|step| step.feedback.is_perfect());

    Ok(SolveResult {
        success,
        guesses,
        secret,
    })
}

/// Play one game against `secret`, stopping at a win or after `max_guesses`
///
/// # Errors
///
/// Returns an error if the solver has no guess to offer.
pub fn play_game(
    solver: &Solver,
    secret: Code,
    max_guesses: usize,
    first_guess: Option<Code>,
) -> Result<Vec<GuessStep>, String> {
    let rule = solver.config().rule;
    let mut session = solver.new_session();
    let mut steps = Vec::new();

    for turn in 0..max_guesses {
        let candidates_before = session.candidates().len();

        let guess = match (turn, first_guess) {
            (0, Some(forced)) => forced,
            _ => solver
                .next_guess(&session)
                .ok_or_else(|| "No candidates remaining".to_string())?,
        };

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = solver.metrics(&session, guess);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = rule.evaluate(guess, secret);
        session = session.record(guess, feedback);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
            expected_remaining,
        });

        if feedback.is_perfect() {
            break;
        }
    }

    Ok(steps)
}

/// Guesses a game took and whether it ended solved
///
/// A game that errored counts as unsolved at the move ceiling.
pub(crate) fn game_length(
    outcome: &Result<Vec<GuessStep>, String>,
    max_guesses: usize,
) -> (usize, bool) {
    match outcome {
        Ok(steps) => (
            steps.len(),
            steps.last().is_some_and(|step| step.feedback.is_perfect()),
        ),
        Err(_) => (max_guesses, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;
    use crate::solver::SolverConfig;

    #[test]
    fn errored_game_counts_at_move_ceiling() {
        let failed: Result<Vec<GuessStep>, String> = Err("No candidates remaining".to_string());
        assert_eq!(game_length(&failed, 10), (10, false));

        let solver = Solver::default();
        let secret = "1467".parse().unwrap();
        let played = play_game(&solver, secret, 10, None);
        let (guesses, success) = game_length(&played, 10);
        assert!(success);
        assert_eq!(guesses, played.unwrap().len());
    }

    #[test]
    fn solve_code_succeeds() {
        let solver = Solver::default();
        let result = solve_code(SolveConfig::new("1467".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, "1467".parse().unwrap());
        assert_eq!(result.guesses.last().unwrap().guess, result.secret);
    }

    #[test]
    fn solve_records_history() {
        let solver = Solver::default();
        let result = solve_code(SolveConfig::new("9080".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses[0].candidates_before, 10_000);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let solver = Solver::default();
        assert!(solve_code(SolveConfig::new("12a4".to_string()), &solver).is_err());
        assert!(solve_code(SolveConfig::new("123".to_string()), &solver).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let solver = Solver::default();
        let mut config = SolveConfig::new("9876".to_string());
        config.max_guesses = 1;

        let result = solve_code(config, &solver).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn solve_uses_forced_first_guess() {
        let solver = Solver::default();
        let mut config = SolveConfig::new("5555".to_string());
        config.first_guess = Some("5555".parse().unwrap());

        let result = solve_code(config, &solver).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert!(result.guesses[0].entropy.is_some());
    }

    #[test]
    fn solve_under_each_rule() {
        for rule in [
            FeedbackRule::Membership,
            FeedbackRule::DuplicateAware,
            FeedbackRule::PegCounting,
        ] {
            let solver = Solver::new(SolverConfig::with_rule(rule));
            let result = solve_code(SolveConfig::new("3353".to_string()), &solver).unwrap();
            assert!(result.success, "{} failed", rule.name());
        }
    }
}

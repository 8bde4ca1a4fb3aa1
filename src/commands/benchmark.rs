//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use super::solve::{game_length, play_game};
use crate::core::{Code, UNIVERSE_SIZE};
use crate::solver::Solver;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// `count` secrets spread evenly over the universe
#[must_use]
pub fn spread_secrets(count: usize) -> Vec<Code> {
    let count = count.min(UNIVERSE_SIZE);
    if count == 0 {
        return Vec::new();
    }
    let step = UNIVERSE_SIZE / count;
    (0..count)
        .map(|i| Code::from_index((i * step) as u16))
        .collect()
}

/// `count` uniformly random secrets, repeats allowed
#[must_use]
pub fn random_secrets(count: usize) -> Vec<Code> {
    (0..count).map(|_| Solver::random_secret()).collect()
}

/// Run benchmark on a set of secrets
///
/// If `forced_first` is provided, it will be used as the first guess instead of
/// letting the solver choose. Unsolved and errored games count toward the
/// averages at the move ceiling.
pub fn run_benchmark(
    solver: &Solver,
    secrets: &[Code],
    forced_first: Option<Code>,
) -> BenchmarkResult {
    let start = Instant::now();
    let max_moves = solver.config().max_moves;
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &secret in secrets {
        let outcome = play_game(solver, secret, max_moves, forced_first);
        let (guesses, success) = game_length(&outcome, max_moves);

        if success {
            solved += 1;
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        total_guesses,
        average_guesses: if total_codes > 0 {
            total_guesses as f64 / total_codes as f64
        } else {
            0.0
        },
        min_guesses: if total_codes > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let solver = Solver::default();
        let secrets = spread_secrets(5);
        let result = run_benchmark(&solver, &secrets, None);

        assert_eq!(result.total_codes, 5);
        assert_eq!(result.solved, 5);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= solver.config().max_moves);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = Solver::default();
        let result = run_benchmark(&solver, &spread_secrets(4), None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_codes);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_with_forced_first_guess() {
        let solver = Solver::default();
        let secrets: Vec<Code> = vec!["9876".parse().unwrap(), "0000".parse().unwrap()];
        let forced = Some("0000".parse().unwrap());

        let result = run_benchmark(&solver, &secrets, forced);
        assert_eq!(result.total_codes, 2);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let solver = Solver::default();
        let result = run_benchmark(&solver, &[], None);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn secret_selection() {
        let spread = spread_secrets(4);
        assert_eq!(spread.len(), 4);
        assert_eq!(spread[1], Code::from_index(2500));
        assert_eq!(spread_secrets(20_000).len(), UNIVERSE_SIZE);
        assert!(spread_secrets(0).is_empty());

        assert_eq!(random_secrets(7).len(), 7);
    }
}

//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback, FeedbackRule, group_by_feedback};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, FeedbackRule};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "0000".parse().unwrap();
/// let candidates: Vec<Code> = vec!["1111".parse().unwrap(), "2222".parse().unwrap()];
///
/// // 0000 cannot tell 1111 from 2222
/// assert_eq!(calculate_max_remaining(FeedbackRule::DuplicateAware, guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(rule: FeedbackRule, guess: Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_feedback(rule, guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Whether some feedback group pins two or more slots as Correct
#[must_use]
pub fn can_lock_in<S: BuildHasher>(counts: &HashMap<Feedback, usize, S>) -> bool {
    counts.keys().any(|feedback| feedback.count_correct() >= 2)
}

/// Minimax-regime score, lower is better
///
/// The largest group size, scaled by `lock_in_factor` when the guess can
/// confirm two or more slots at once.
#[must_use]
pub fn minimax_score<S: BuildHasher>(
    counts: &HashMap<Feedback, usize, S>,
    lock_in_factor: f64,
) -> f64 {
    let worst = counts.values().copied().max().unwrap_or(0) as f64;
    if can_lock_in(counts) {
        worst * lock_in_factor
    } else {
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::universe;

    const RULE: FeedbackRule = FeedbackRule::DuplicateAware;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| code(s)).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let candidates = codes(&["1467", "9999"]);
        assert_eq!(calculate_max_remaining(RULE, code("1467"), &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let candidates = codes(&["1111", "2222", "3333"]);
        assert_eq!(calculate_max_remaining(RULE, code("9999"), &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        assert_eq!(calculate_max_remaining(RULE, code("0123"), &[]), 0);
    }

    #[test]
    fn max_remaining_full_universe() {
        // All-Wrong group: 6^4 codes avoid 0, 1, 2 and 3
        assert_eq!(calculate_max_remaining(RULE, code("0123"), universe()), 1296);
        // All-Wrong group: 9^4 codes avoid 0
        assert_eq!(calculate_max_remaining(RULE, code("0000"), universe()), 6561);
    }

    #[test]
    fn minimax_prefers_better_splits() {
        let candidates = codes(&["1111", "2222"]);
        let bad = calculate_max_remaining(RULE, code("9999"), &candidates);
        let good = calculate_max_remaining(RULE, code("1111"), &candidates);
        assert!(good < bad);
    }

    #[test]
    fn lock_in_detection() {
        let guess = code("1234");
        let near = group_by_feedback(RULE, guess, &codes(&["1299", "9999"]));
        assert!(can_lock_in(&near));

        let far = group_by_feedback(RULE, guess, &codes(&["1999", "9999"]));
        assert!(!can_lock_in(&far));
    }

    #[test]
    fn minimax_score_applies_factor() {
        let guess = code("1234");
        let with_lock = group_by_feedback(RULE, guess, &codes(&["1299", "9999", "8888"]));
        // Worst group is {9999, 8888}
        assert!((minimax_score(&with_lock, 0.8) - 1.6).abs() < 1e-9);
        assert!((minimax_score(&with_lock, 1.0) - 2.0).abs() < 1e-9);

        let without = group_by_feedback(RULE, guess, &codes(&["9999", "8888"]));
        assert!((minimax_score(&without, 0.8) - 2.0).abs() < 1e-9);
    }
}

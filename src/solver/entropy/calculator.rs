//! Shannon entropy calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Feedback, FeedbackRule, group_by_feedback};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback groups
    pub groups: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, FeedbackRule};
/// use mastermind_solver::solver::entropy::calculate_entropy;
///
/// let guess: Code = "1467".parse().unwrap();
/// let candidates: Vec<Code> = vec!["1467".parse().unwrap(), "9999".parse().unwrap()];
///
/// let entropy = calculate_entropy(FeedbackRule::DuplicateAware, guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // even split of two
/// ```
#[must_use]
pub fn calculate_entropy(rule: FeedbackRule, guess: Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(rule, guess, candidates))
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one group with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n groups
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Feedback, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy divided by the most any guess could achieve, `log₂(total)`
///
/// 1.0 means every candidate lands in its own group. Sets of 0 or 1
/// candidates carry no uncertainty and count as fully resolved.
#[must_use]
pub fn normalized_entropy<S: BuildHasher>(counts: &HashMap<Feedback, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>();
    if total <= 1 {
        return 1.0;
    }
    (shannon_entropy(counts) / (total as f64).log2()).clamp(0.0, 1.0)
}

/// Entropy-regime score on a 0-10 scale, lower is better
///
/// `round(10 × (1 − normalised entropy))`: an even split scores 0, a guess
/// that tells nothing scores 10.
#[must_use]
pub fn entropy_score<S: BuildHasher>(counts: &HashMap<Feedback, usize, S>) -> f64 {
    (10.0 * (1.0 - normalized_entropy(counts))).round()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, worst-case group size and
/// the number of groups.
#[must_use]
pub fn calculate_metrics(rule: FeedbackRule, guess: Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            groups: 0,
        };
    }

    let counts = group_by_feedback(rule, guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = counts
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        groups: counts.len(),
    }
}

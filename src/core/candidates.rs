//! Candidate space and constraint filtering
//!
//! The universe is every 4-digit code in ascending order. Filtering keeps the
//! input order, so any subset derived from the universe stays sorted.

use super::code::{Code, UNIVERSE_SIZE};
use super::feedback::{FEEDBACK_COUNT, Feedback, FeedbackRule, Response};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static UNIVERSE: LazyLock<Vec<Code>> =
    LazyLock::new(|| (0..UNIVERSE_SIZE as u16).map(Code::from_index).collect());

/// All 10,000 codes, `0000` through `9999`
#[must_use]
pub fn universe() -> &'static [Code] {
    &UNIVERSE
}

/// Keep the candidates that would have produced `response` to `guess`
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, FeedbackRule, Response, filter, universe};
///
/// let guess: Code = "1467".parse().unwrap();
/// let response: Response = "CCCC".parse().unwrap();
/// let remaining = filter(FeedbackRule::DuplicateAware, universe(), guess, response);
///
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter(
    rule: FeedbackRule,
    candidates: &[Code],
    guess: Code,
    response: impl Into<Response>,
) -> Vec<Code> {
    let response = response.into();
    candidates
        .iter()
        .copied()
        .filter(|&candidate| response.admits(rule, guess, candidate))
        .collect()
}

/// Count how many candidates fall into each feedback group for `guess`
#[must_use]
pub fn group_by_feedback(
    rule: FeedbackRule,
    guess: Code,
    candidates: &[Code],
) -> FxHashMap<Feedback, usize> {
    let mut counts =
        FxHashMap::with_capacity_and_hasher(FEEDBACK_COUNT, rustc_hash::FxBuildHasher);

    for &candidate in candidates {
        *counts.entry(rule.evaluate(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Split candidates into their feedback groups, ordered by feedback value
///
/// Members keep their input order inside each group.
#[must_use]
pub fn partition(
    rule: FeedbackRule,
    guess: Code,
    candidates: &[Code],
) -> Vec<(Feedback, Vec<Code>)> {
    let mut groups: FxHashMap<Feedback, Vec<Code>> = FxHashMap::default();

    for &candidate in candidates {
        groups
            .entry(rule.evaluate(guess, candidate))
            .or_default()
            .push(candidate);
    }

    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_unstable_by_key(|(feedback, _)| *feedback);
    groups
}

//! Win-probability simulation
//!
//! Plays a guess forward against every candidate, recursing into each
//! feedback group with that group's best member until the depth budget runs
//! out, then estimates the remaining moves.

use super::scorer::Scorer;
use crate::core::{Code, partition};
use std::collections::BTreeMap;

/// Groups at or below this size are estimated at two further moves once the
/// depth budget is spent; larger groups at three
const SMALL_GROUP: usize = 4;

/// Probability of winning on each move number
///
/// Move numbers are absolute: move 1 is the first guess of the game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinDistribution {
    by_move: BTreeMap<usize, f64>,
}

impl WinDistribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Certain win on `move_number`
    #[must_use]
    pub fn certain(move_number: usize) -> Self {
        let mut dist = Self::new();
        dist.add(move_number, 1.0);
        dist
    }

    /// Win on `move_number` with probability `p`, otherwise on the next move
    #[must_use]
    pub fn split(move_number: usize, p: f64) -> Self {
        let mut dist = Self::new();
        dist.add(move_number, p);
        dist.add(move_number + 1, 1.0 - p);
        dist
    }

    /// Add probability mass to a move; zero mass is ignored
    pub fn add(&mut self, move_number: usize, mass: f64) {
        if mass > 0.0 {
            *self.by_move.entry(move_number).or_insert(0.0) += mass;
        }
    }

    /// Fold `other` in, scaled by `weight`
    pub fn merge_scaled(&mut self, other: &Self, weight: f64) {
        for (&move_number, &p) in &other.by_move {
            self.add(move_number, p * weight);
        }
    }

    #[must_use]
    pub fn probability_at(&self, move_number: usize) -> f64 {
        self.by_move.get(&move_number).copied().unwrap_or(0.0)
    }

    /// Total mass; 1.0 for any non-empty simulation
    #[must_use]
    pub fn total(&self) -> f64 {
        self.by_move.values().sum()
    }

    /// Mean move number of the win
    #[must_use]
    pub fn expected_moves(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        self.by_move
            .iter()
            .map(|(&move_number, &p)| move_number as f64 * p)
            .sum::<f64>()
            / total
    }

    /// The latest move with any mass
    #[must_use]
    pub fn worst_case(&self) -> Option<usize> {
        self.by_move.keys().next_back().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_move.is_empty()
    }

    /// (move number, probability) pairs in move order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.by_move.iter().map(|(&m, &p)| (m, p))
    }
}

/// Distribution of the winning move if `guess` is played now
///
/// `moves_so_far` counts guesses already made. Each feedback group carries
/// mass proportional to its size. A perfect group wins on this move, a
/// singleton on the next; anything larger recurses with the group's own best
/// member while `max_depth` allows.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, FeedbackRule};
/// use mastermind_solver::solver::{Scorer, simulate};
///
/// let scorer = Scorer::new(FeedbackRule::DuplicateAware, 10, 0.8);
/// let candidates: Vec<Code> = vec!["1467".parse().unwrap(), "1468".parse().unwrap()];
///
/// let dist = simulate(&scorer, candidates[0], &candidates, 2, 3);
/// assert!((dist.probability_at(3) - 0.5).abs() < 1e-9);
/// assert!((dist.probability_at(4) - 0.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn simulate(
    scorer: &Scorer,
    guess: Code,
    candidates: &[Code],
    moves_so_far: usize,
    max_depth: usize,
) -> WinDistribution {
    let mut dist = WinDistribution::new();
    if candidates.is_empty() {
        return dist;
    }

    let this_move = moves_so_far + 1;
    let total = candidates.len() as f64;

    for (feedback, group) in partition(scorer.rule, guess, candidates) {
        let mass = group.len() as f64 / total;

        if feedback.is_perfect() {
            dist.add(this_move, mass);
        } else if group.len() == 1 {
            dist.add(this_move + 1, mass);
        } else if max_depth == 0 {
            let remaining = if group.len() <= SMALL_GROUP { 2 } else { 3 };
            dist.add(this_move + remaining, mass);
        } else if let Some((next, _)) = scorer.best_guess(&group, &group) {
            let sub = simulate(scorer, next, &group, this_move, max_depth - 1);
            dist.merge_scaled(&sub, mass);
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackRule, universe};
    use crate::solver::SolverConfig;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| code(s)).collect()
    }

    fn scorer() -> Scorer {
        Scorer::from_config(&SolverConfig::default())
    }

    #[test]
    fn single_candidate_wins_now() {
        let dist = simulate(&scorer(), code("1467"), &codes(&["1467"]), 4, 3);
        assert_eq!(dist, WinDistribution::certain(5));
    }

    #[test]
    fn separating_non_candidate_wins_next_move() {
        let candidates = codes(&["1467", "1468"]);
        // 7000 tells them apart but is neither
        let dist = simulate(&scorer(), code("7000"), &candidates, 0, 3);
        assert!((dist.probability_at(2) - 1.0).abs() < 1e-9);
        assert!(dist.probability_at(1).abs() < 1e-9);
    }

    #[test]
    fn mass_sums_to_one() {
        let sets = [
            codes(&["1460", "1461", "1462", "1463", "1464", "1465"]),
            codes(&["1111", "2222", "3333", "4444", "5555"]),
            universe()[..20].to_vec(),
        ];
        for candidates in &sets {
            for depth in 0..=3 {
                let dist = simulate(&scorer(), code("0123"), candidates, 1, depth);
                assert!((dist.total() - 1.0).abs() < 1e-9, "depth {depth}: {dist:?}");
                assert!(dist.iter().all(|(m, _)| m >= 2));
            }
        }
    }

    #[test]
    fn depth_zero_estimates_unresolved_groups() {
        // 9999 sees nothing: one group of three
        let candidates = codes(&["1111", "2222", "3333"]);
        let dist = simulate(&scorer(), code("9999"), &candidates, 0, 0);
        assert_eq!(dist, WinDistribution::certain(3));

        let big: Vec<Code> = codes(&["1111", "2222", "3333", "4444", "5555"]);
        let dist = simulate(&scorer(), code("9999"), &big, 0, 0);
        assert_eq!(dist, WinDistribution::certain(4));
    }

    #[test]
    fn recursion_resolves_small_groups() {
        let candidates = codes(&["1111", "2222", "3333"]);
        let dist = simulate(&scorer(), code("9999"), &candidates, 0, 3);

        // Blind guess, then each member is tried in turn
        assert!((dist.probability_at(2) - 1.0 / 3.0).abs() < 1e-9);
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert!(dist.expected_moves() > 2.0);
    }

    #[test]
    fn empty_candidates_give_empty_distribution() {
        let dist = simulate(&scorer(), code("0123"), &[], 0, 3);
        assert!(dist.is_empty());
        assert!(dist.expected_moves().abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_helpers() {
        let mut dist = WinDistribution::split(3, 0.25);
        assert!((dist.probability_at(3) - 0.25).abs() < 1e-9);
        assert!((dist.probability_at(4) - 0.75).abs() < 1e-9);
        assert!((dist.expected_moves() - 3.75).abs() < 1e-9);
        assert_eq!(dist.worst_case(), Some(4));

        dist.merge_scaled(&WinDistribution::certain(6), 0.0);
        assert_eq!(dist.worst_case(), Some(4));
    }

    #[test]
    fn peg_counting_rule_also_sums_to_one() {
        let peg = Scorer::new(FeedbackRule::PegCounting, 10, 0.8);
        let candidates = codes(&["1123", "1132", "2113", "3121", "1312"]);
        let dist = simulate(&peg, code("1123"), &candidates, 0, 3);
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert!(dist.probability_at(1) > 0.0);
    }
}

//! Guess scoring
//!
//! Lower scores are better. Small candidate sets are scored by how evenly a
//! guess splits them (normalised entropy on a 0-10 scale); larger sets by the
//! worst-case group size.

use super::config::SolverConfig;
use super::entropy::entropy_score;
use super::minimax::minimax_score;
use crate::core::{Code, FeedbackRule, group_by_feedback};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

/// Subsets up to this size are keyed by their full member list
const EXACT_SIGNATURE_LIMIT: usize = 64;

/// Pure scoring parameters, cheap to copy into worker threads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub rule: FeedbackRule,
    pub entropy_threshold: usize,
    pub lock_in_factor: f64,
}

impl Scorer {
    #[must_use]
    pub const fn new(rule: FeedbackRule, entropy_threshold: usize, lock_in_factor: f64) -> Self {
        Self {
            rule,
            entropy_threshold,
            lock_in_factor,
        }
    }

    #[must_use]
    pub const fn from_config(config: &SolverConfig) -> Self {
        Self::new(
            config.rule,
            config.entropy_threshold,
            config.lock_in_factor,
        )
    }

    /// Score `guess` against the candidate set
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, FeedbackRule};
    /// use mastermind_solver::solver::Scorer;
    ///
    /// let scorer = Scorer::new(FeedbackRule::DuplicateAware, 10, 0.8);
    /// let candidates: Vec<Code> = vec!["1467".parse().unwrap(), "9999".parse().unwrap()];
    ///
    /// // 1467 separates the two candidates perfectly
    /// assert_eq!(scorer.score("1467".parse().unwrap(), &candidates), 0.0);
    /// ```
    #[must_use]
    pub fn score(&self, guess: Code, candidates: &[Code]) -> f64 {
        if candidates.len() <= 1 {
            return 0.0;
        }

        let counts = group_by_feedback(self.rule, guess, candidates);

        if candidates.len() <= self.entropy_threshold {
            entropy_score(&counts)
        } else {
            minimax_score(&counts, self.lock_in_factor)
        }
    }

    /// The single best-scoring guess from `pool`
    ///
    /// Ties keep the earliest guess in the pool. Returns `None` if the pool
    /// is empty.
    #[must_use]
    pub fn best_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<(Code, f64)> {
        pool.par_iter()
            .map(|&guess| (guess, self.score(guess, candidates)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }
}

/// Identity of a candidate subset for cache lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubsetSignature {
    /// Every member index, for small subsets
    Exact(Vec<u16>),
    /// Size plus a hash over every member index, for large subsets
    Digest { len: usize, hash: u64 },
}

impl SubsetSignature {
    #[must_use]
    pub fn of(candidates: &[Code]) -> Self {
        if candidates.len() <= EXACT_SIGNATURE_LIMIT {
            return Self::Exact(candidates.iter().map(|c| c.index()).collect());
        }

        let mut hasher = FxHasher::default();
        for candidate in candidates {
            candidate.index().hash(&mut hasher);
        }
        Self::Digest {
            len: candidates.len(),
            hash: hasher.finish(),
        }
    }
}

type CacheKey = (FeedbackRule, Code, SubsetSignature);

/// Memoised scores keyed by (rule, guess, subset signature)
///
/// Entries are pure functions of their key, so a racing double insert is
/// harmless. The map is cleared wholesale once it reaches capacity.
#[derive(Debug)]
pub struct ScoreCache {
    entries: Mutex<FxHashMap<CacheKey, f64>>,
    capacity: usize,
}

impl ScoreCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            capacity,
        }
    }

    /// Score every guess in `pool`, reusing cached values
    ///
    /// Misses are computed in parallel outside the lock and inserted in one
    /// batch. Output order matches `pool`.
    pub fn score_pool(&self, scorer: &Scorer, pool: &[Code], candidates: &[Code]) -> Vec<f64> {
        let signature = SubsetSignature::of(candidates);

        let cached: Vec<Option<f64>> = {
            let entries = self.lock();
            pool.iter()
                .map(|&guess| entries.get(&(scorer.rule, guess, signature.clone())).copied())
                .collect()
        };

        let scores: Vec<f64> = pool
            .par_iter()
            .zip(cached.par_iter())
            .map(|(&guess, hit)| hit.unwrap_or_else(|| scorer.score(guess, candidates)))
            .collect();

        let mut entries = self.lock();
        if entries.len() + pool.len() > self.capacity {
            entries.clear();
        }
        for ((&guess, hit), &score) in pool.iter().zip(&cached).zip(&scores) {
            if hit.is_none() {
                entries.insert((scorer.rule, guess, signature.clone()), score);
            }
        }

        scores
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<CacheKey, f64>> {
        // A poisoned map still holds valid pure scores
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

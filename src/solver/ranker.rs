//! Recommendation ranking
//!
//! Turns a session into an ordered list of suggested guesses. Three regimes:
//! a single candidate is simply named; two or three candidates get the
//! endgame listing with separating "safe" guesses; anything larger is scored
//! from the generated pool and filtered by tolerance.

use super::config::SolverConfig;
use super::generator::{SPREAD_GUESSES, generate_pool, probing_guesses};
use super::scorer::{ScoreCache, Scorer};
use super::session::GameSession;
use super::simulator::{WinDistribution, simulate};
use crate::core::{Code, FeedbackRule, group_by_feedback};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// One recommended guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub guess: Code,
    /// Lower is better; comparable only within one recommendation list
    pub score: f64,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
    /// Winning-move distribution, for small candidate sets
    pub win: Option<WinDistribution>,
}

/// Rank guesses for the session's next move
///
/// Returns at most `max_suggestions` entries (at least one), except that
/// small candidate sets always list every candidate. An empty candidate set
/// gives an empty list.
pub fn recommend(
    config: &SolverConfig,
    cache: &ScoreCache,
    session: &GameSession,
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let candidates = session.candidates();
    let moves = session.move_count();
    let max_suggestions = max_suggestions.max(1);
    let scorer = Scorer {
        rule: session.rule(),
        ..Scorer::from_config(config)
    };

    match candidates {
        [] => Vec::new(),
        [only] => vec![Suggestion {
            guess: *only,
            score: 0.0,
            is_candidate: true,
            win: Some(WinDistribution::certain(moves + 1)),
        }],
        _ if candidates.len() <= config.tiny_threshold => {
            endgame(config, cache, &scorer, candidates, moves, max_suggestions)
        }
        _ => ranked_pool(config, cache, &scorer, candidates, moves, max_suggestions),
    }
}

fn endgame(
    config: &SolverConfig,
    cache: &ScoreCache,
    scorer: &Scorer,
    candidates: &[Code],
    moves: usize,
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let n = candidates.len();
    let scores = cache.score_pool(scorer, candidates, candidates);
    let win_now = 1.0 / n as f64;

    let mut list: Vec<Suggestion> = candidates
        .iter()
        .zip(scores)
        .map(|(&guess, score)| Suggestion {
            guess,
            score,
            is_candidate: true,
            win: Some(WinDistribution::split(moves + 1, win_now)),
        })
        .collect();

    // Equal scores: repeated digits first
    list.sort_by(|a, b| {
        a.score.total_cmp(&b.score).then_with(|| {
            b.guess
                .repeated_digits()
                .cmp(&a.guess.repeated_digits())
        })
    });

    let worst = list.iter().map(|s| s.score).fold(0.0, f64::max);
    list.extend(
        safe_guesses(scorer.rule, candidates, config.safe_guesses)
            .into_iter()
            .map(|guess| Suggestion {
                guess,
                score: worst + 1.0,
                is_candidate: false,
                win: Some(WinDistribution::certain(moves + 2)),
            }),
    );

    list.truncate(max_suggestions.max(n));
    list
}

fn ranked_pool(
    config: &SolverConfig,
    cache: &ScoreCache,
    scorer: &Scorer,
    candidates: &[Code],
    moves: usize,
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let n = candidates.len();
    let pool = generate_pool(candidates, moves, config);
    let scores = cache.score_pool(scorer, &pool, candidates);

    let mut ranked: Vec<Suggestion> = pool
        .iter()
        .zip(scores)
        .map(|(&guess, score)| Suggestion {
            guess,
            score,
            is_candidate: candidates.binary_search(&guess).is_ok(),
            win: None,
        })
        .collect();

    // Stable: equal scores keep pool order, candidates ahead of non-candidates
    ranked.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| b.is_candidate.cmp(&a.is_candidate))
    });

    let best = ranked.first().map_or(0.0, |s| s.score);
    let tolerance = if n <= config.entropy_threshold {
        config.small_tolerance
    } else {
        best * config.large_tolerance_ratio
    };
    ranked.retain(|s| s.is_candidate || s.score <= best + tolerance);

    let rest = if ranked.len() > max_suggestions {
        ranked.split_off(max_suggestions)
    } else {
        Vec::new()
    };
    let mut shown = ranked;
    if n <= config.show_all_below {
        shown.extend(rest.into_iter().filter(|s| s.is_candidate));
    }

    if n <= config.simulate_threshold {
        shown.par_iter_mut().for_each(|s| {
            s.win = Some(simulate(scorer, s.guess, candidates, moves, config.max_depth));
        });
    }

    shown
}

/// Non-candidate guesses that give every candidate a different feedback
///
/// Playing one costs a move but guarantees a win on the next. `candidates`
/// need not be sorted.
#[must_use]
pub fn safe_guesses(rule: FeedbackRule, candidates: &[Code], limit: usize) -> Vec<Code> {
    let mut seen = FxHashSet::default();
    probing_guesses(candidates)
        .into_iter()
        .chain(SPREAD_GUESSES)
        .filter(|guess| seen.insert(*guess))
        .filter(|guess| !candidates.contains(guess))
        .filter(|&guess| group_by_feedback(rule, guess, candidates).len() == candidates.len())
        .take(limit)
        .collect()
}

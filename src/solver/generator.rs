//! Guess pool generation
//!
//! Builds the de-duplicated, deterministic list of guesses worth scoring for
//! the current candidate set.

use super::config::SolverConfig;
use crate::core::{ALPHABET_SIZE, CODE_LENGTH, Code};
use rustc_hash::FxHashSet;

/// Fixed first-move guesses spreading all ten digits across the slots
pub const OPENING_BOOK: [Code; 4] = [
    Code::from_index(123),
    Code::from_index(4567),
    Code::from_index(1357),
    Code::from_index(2468),
];

/// Fixed distinct-digit guesses mixed into large pools
pub const SPREAD_GUESSES: [Code; 12] = [
    Code::from_index(123),
    Code::from_index(4567),
    Code::from_index(8901),
    Code::from_index(2345),
    Code::from_index(6789),
    Code::from_index(1357),
    Code::from_index(246),
    Code::from_index(1593),
    Code::from_index(2804),
    Code::from_index(3716),
    Code::from_index(4925),
    Code::from_index(5068),
];

/// Build the guess pool for `candidates` after `move_count` moves
///
/// Order matters: earlier guesses win score ties downstream, so the opening
/// book comes first, then candidates, then synthesised and spread guesses.
#[must_use]
pub fn generate_pool(candidates: &[Code], move_count: usize, config: &SolverConfig) -> Vec<Code> {
    let mut pool = Vec::new();

    if move_count == 0 {
        pool.extend_from_slice(&OPENING_BOOK);
    }

    if candidates.len() <= config.synthesis_threshold {
        pool.extend_from_slice(candidates);
        pool.extend(probing_guesses(candidates));
    } else {
        pool.extend(candidates.iter().take(config.candidate_sample));
    }

    if candidates.len() > config.spread_threshold {
        pool.extend_from_slice(&SPREAD_GUESSES);
    }

    dedup_in_order(pool)
}

/// Distinct-digit guesses built from digit frequencies in `candidates`
///
/// Digits that occur are taken rarest first (ties by value); digits that
/// never occur pad the guess when fewer than four occur. Produces the
/// rarest four and their rotations, the most common four, and a half
/// present, half absent probe.
#[must_use]
pub fn probing_guesses(candidates: &[Code]) -> Vec<Code> {
    let mut frequency = [0usize; ALPHABET_SIZE as usize];
    for candidate in candidates {
        for (digit, &count) in candidate.digit_counts().iter().enumerate() {
            if count > 0 {
                frequency[digit] += 1;
            }
        }
    }

    let mut present: Vec<u8> = (0..ALPHABET_SIZE)
        .filter(|&d| frequency[d as usize] > 0)
        .collect();
    present.sort_by_key(|&d| (frequency[d as usize], d));
    let absent: Vec<u8> = (0..ALPHABET_SIZE)
        .filter(|&d| frequency[d as usize] == 0)
        .collect();

    let padded: Vec<u8> = present.iter().chain(&absent).copied().collect();
    let mut guesses = Vec::new();

    if let Some(rarest) = code_from(&padded) {
        for shift in 0..CODE_LENGTH {
            let mut digits = *rarest.digits();
            digits.rotate_left(shift);
            guesses.extend(code_from(&digits));
        }
    }

    let commonest: Vec<u8> = present.iter().rev().chain(&absent).copied().collect();
    guesses.extend(code_from(&commonest));

    if present.len() >= 2 && absent.len() >= 2 {
        guesses.extend(code_from(&[present[0], absent[0], present[1], absent[1]]));
    }

    dedup_in_order(
        guesses
            .into_iter()
            .filter(|guess| !guess.has_repeats())
            .collect(),
    )
}

/// First four digits as a code, if there are four
fn code_from(digits: &[u8]) -> Option<Code> {
    let digits: [u8; CODE_LENGTH] = digits.get(..CODE_LENGTH)?.try_into().ok()?;
    Code::new(digits).ok()
}

fn dedup_in_order(codes: Vec<Code>) -> Vec<Code> {
    let mut seen = FxHashSet::default();
    codes.into_iter().filter(|code| seen.insert(*code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::universe;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| code(s)).collect()
    }

    #[test]
    fn opening_book_is_fixed_and_distinct() {
        assert_eq!(OPENING_BOOK[0], code("0123"));
        assert!(OPENING_BOOK.iter().all(|c| !c.has_repeats()));
        assert!(SPREAD_GUESSES.iter().all(|c| !c.has_repeats()));
    }

    #[test]
    fn first_move_pool_leads_with_opening_book() {
        let pool = generate_pool(universe(), 0, &SolverConfig::default());
        assert_eq!(&pool[..4], &OPENING_BOOK);
        assert!(pool.contains(&code("0000")));
        assert!(pool.contains(&code("8901")));
    }

    #[test]
    fn large_pool_is_bounded_sample_plus_spread() {
        let config = SolverConfig::default();
        let pool = generate_pool(universe(), 1, &config);

        // 50 sampled candidates (all with repeated leading zeros) and the
        // spread guesses
        assert_eq!(pool.len(), config.candidate_sample + SPREAD_GUESSES.len());
        assert!(!pool.contains(&code("0050")));
    }

    #[test]
    fn small_pool_contains_every_candidate() {
        let candidates = codes(&["1460", "1461", "1462", "1467", "1469"]);
        let pool = generate_pool(&candidates, 2, &SolverConfig::default());

        assert!(candidates.iter().all(|c| pool.contains(c)));
        assert!(pool.len() > candidates.len());
        assert!(!pool.iter().any(|c| SPREAD_GUESSES.contains(c) && !candidates.contains(c)));
    }

    #[test]
    fn medium_pool_has_no_spread_or_synthesis() {
        let candidates: Vec<Code> = universe()[..60].to_vec();
        let pool = generate_pool(&candidates, 3, &SolverConfig::default());
        assert_eq!(pool, candidates[..50].to_vec());
    }

    #[test]
    fn pool_is_deterministic_and_unique() {
        let config = SolverConfig::default();
        let a = generate_pool(universe(), 0, &config);
        let b = generate_pool(universe(), 0, &config);
        assert_eq!(a, b);

        let unique: FxHashSet<_> = a.iter().collect();
        assert_eq!(unique.len(), a.len());
    }

    #[test]
    fn probing_uses_rarest_digits_first() {
        // Digit frequencies: 1,4,6 in all three; 0, 2, 7 in one each
        let candidates = codes(&["1460", "1462", "1467"]);
        let probes = probing_guesses(&candidates);

        assert_eq!(probes[0], code("0271"));
        assert!(probes.iter().all(|p| !p.has_repeats()));
    }

    #[test]
    fn probing_pads_with_absent_digits() {
        let candidates = codes(&["1111", "2222"]);
        let probes = probing_guesses(&candidates);

        // Present: 1, 2; absent padding: 0, 3
        assert_eq!(probes[0], code("1203"));
        assert!(probes.contains(&code("1023")));
    }

    #[test]
    fn probing_empty_candidates() {
        // Every digit is absent; still yields distinct-digit guesses
        let probes = probing_guesses(&[]);
        assert!(probes.iter().all(|p| !p.has_repeats()));
    }
}

//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use super::solve::{game_length, play_game};
use crate::core::{Code, universe};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub max_moves: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_code: Option<(Code, usize)>,
    pub worst_codes: Vec<(Code, usize)>,
    pub first_guess_used: HashMap<Code, usize>,
}

/// Secrets needing at least this many guesses are listed as hardest
const HARD_GAME: usize = 7;

/// Run solver on every secret (or the first `limit` of them)
///
/// Games run in parallel on the rayon pool. If `forced_first` is provided, it
/// will be used as the first guess instead of letting the solver choose.
pub fn run_test_all(
    solver: &Solver,
    limit: Option<usize>,
    forced_first: Option<Code>,
) -> TestAllStatistics {
    let all = universe();
    let secrets = &all[..limit.unwrap_or(all.len()).min(all.len())];
    let max_moves = solver.config().max_moves;

    println!("🎯 Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .map(|&secret| {
            let outcome = play_game(solver, secret, max_moves, forced_first);
            let (num_guesses, success) = game_length(&outcome, max_moves);
            pb.inc(1);
            CodeTestResult {
                secret,
                success,
                num_guesses,
                guesses: outcome
                    .map(|steps| steps.iter().map(|s| s.guess).collect())
                    .unwrap_or_default(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, max_moves, total_start.elapsed())
}

/// Fold per-secret results into statistics
#[must_use]
pub fn summarize(
    results: &[CodeTestResult],
    max_moves: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<Code, usize> = HashMap::new();

    for result in results {
        if let Some(&first) = result.guesses.first() {
            *first_guess_used.entry(first).or_insert(0) += 1;
        }
        if result.success {
            *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
        }
    }

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let best_code = solved
        .iter()
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.secret, r.num_guesses));

    let mut worst_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses >= HARD_GAME)
        .map(|r| (r.secret, r.num_guesses))
        .collect();
    worst_codes.sort_by_key(|&(code, n)| (std::cmp::Reverse(n), code));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        max_moves,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        best_code,
        worst_codes,
        first_guess_used,
    }
}

/// Print test-all statistics with formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    if stats.solved > 0 {
        for guesses in 1..=stats.max_moves {
            let count = *stats.guess_distribution.get(&guesses).unwrap_or(&0);
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    println!("\n🧮 Information Theory Metrics");
    let total_bits = total.log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");

    if let Some((code, guesses)) = &stats.best_code {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            code.to_string().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes ({HARD_GAME}+ guesses)").yellow().bold()
        );
        for (code, guesses) in stats.worst_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(Code, usize)> = stats
        .first_guess_used
        .iter()
        .map(|(&k, &v)| (k, v))
        .collect();
    first_guesses.sort_by_key(|&(code, count)| (std::cmp::Reverse(count), code));

    for (code, count) in first_guesses.iter().take(5) {
        let percentage = *count as f64 / total * 100.0;
        println!("  {code}: {count} times ({percentage:.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn result(secret: &str, guesses: &[&str], success: bool) -> CodeTestResult {
        CodeTestResult {
            secret: code(secret),
            guesses: guesses.iter().map(|g| code(g)).collect(),
            num_guesses: guesses.len(),
            success,
        }
    }

    #[test]
    fn run_test_all_with_limit() {
        let solver = Solver::default();
        let stats = run_test_all(&solver, Some(3), None);

        assert_eq!(stats.total_codes, 3);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.first_guess_used.get(&code("0123")), Some(&3));
    }

    #[test]
    fn summarize_counts_and_extremes() {
        let results = vec![
            result("0123", &["0123"], true),
            result("4444", &["0123", "4567", "4444"], true),
            result("9999", &["0123", "4567", "8901", "2345", "6789", "9999", "1111"], true),
            result("5555", &["0123", "4567"], false),
        ];
        let stats = summarize(&results, 10, Duration::from_secs(1));

        assert_eq!(stats.total_codes, 4);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 7);
        assert!((stats.average_guesses - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.best_code, Some((code("0123"), 1)));
        assert_eq!(stats.worst_codes, vec![(code("9999"), 7)]);
        assert_eq!(stats.first_guess_used.get(&code("0123")), Some(&4));

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], 10, Duration::ZERO);
        assert_eq!(stats.total_codes, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.best_code.is_none());
    }
}

//! Display functions for command results

use super::formatters::{entropy_bar, feedback_to_symbols, format_win_distribution};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestResult};
use crate::solver::{GameSession, Suggestion};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess,
            feedback_to_symbols(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        ratio.log2(),
                        ratio
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!(
        "\n📊 Against {} possible codes{}:",
        result.total_candidates,
        if result.is_candidate {
            " (guess is a candidate)"
        } else {
            ""
        }
    );
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Score:       {:.1} (lower is better)", result.score);
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates across {} groups",
        result.max_partition, result.groups
    );

    if let Some(win) = &result.win {
        println!(
            "   Win by move: {} (mean {:.2}, worst {})",
            format_win_distribution(win),
            win.expected_moves(),
            win.worst_case().unwrap_or_default()
        );
    }
}

/// Print ranked suggestions for the next move
pub fn print_suggestions(session: &GameSession, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("\n{}", "No candidates remain.".red().bold());
        return;
    }

    println!(
        "\n📊 Suggestions for move {} ({} candidates):",
        session.move_count() + 1,
        session.candidates().len()
    );
    for (i, s) in suggestions.iter().enumerate() {
        let guess = if s.is_candidate {
            s.guess.to_string().bright_green().bold()
        } else {
            s.guess.to_string().bright_white().bold()
        };
        let marker = if s.is_candidate { "●" } else { " " };
        let win = s
            .win
            .as_ref()
            .map(|w| format!("  win {}", format_win_distribution(w)))
            .unwrap_or_default();
        println!("  {:2}. {guess} {marker} score {:7.1}{win}", i + 1, s.score);
    }
    println!();
}

/// Print the result of a suggestion request
pub fn print_suggest_result(result: &SuggestResult) {
    if result.session.move_count() > 0 {
        println!("\n{}", "History:".bright_cyan().bold());
        for (guess, response) in result.session.history() {
            println!("  {guess} {response}");
        }
    }
    print_suggestions(&result.session, &result.suggestions);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

//! Formatting utilities for terminal output

use crate::core::{FEEDBACK_COUNT, Feedback, Response, Tag};
use crate::solver::WinDistribution;
use colored::Colorize;

/// Peg symbol for a tag: ● correct, ○ wrong place, · absent
#[must_use]
pub const fn peg(tag: Tag) -> char {
    match tag {
        Tag::Correct => '●',
        Tag::Partial => '○',
        Tag::Wrong => '·',
    }
}

/// Format feedback as plain peg symbols, slot order
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    feedback.tags().into_iter().map(peg).collect()
}

/// Format feedback as colored peg symbols
#[must_use]
pub fn feedback_to_symbols(feedback: Feedback) -> String {
    feedback
        .tags()
        .into_iter()
        .map(|tag| {
            let symbol = peg(tag).to_string();
            match tag {
                Tag::Correct => symbol.bright_green().to_string(),
                Tag::Partial => symbol.bright_yellow().to_string(),
                Tag::Wrong => symbol.bright_black().to_string(),
            }
        })
        .collect()
}

/// Format either kind of response for display
#[must_use]
pub fn response_to_symbols(response: Response) -> String {
    match response {
        Response::Slots(feedback) => feedback_to_symbols(feedback),
        Response::Counts(counts) => format!(
            "{} {}",
            counts.correct().to_string().bright_green(),
            counts.partial().to_string().bright_yellow()
        ),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most any guess can reach
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (FEEDBACK_COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// One-line summary of a win distribution: `3:50% 4:50%`
#[must_use]
pub fn format_win_distribution(dist: &WinDistribution) -> String {
    dist.iter()
        .map(|(move_number, p)| format!("{move_number}:{:.0}%", p * 100.0))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Minimax guess evaluation
//!
//! Measures the worst case left over after a guess.

mod calculator;

pub use calculator::{calculate_max_remaining, can_lock_in, minimax_score};

//! Entropy-based guess evaluation
//!
//! Measures how evenly a guess splits the candidate set.

mod calculator;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropy_score, normalized_entropy,
    shannon_entropy,
};

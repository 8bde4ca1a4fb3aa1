//! Mastermind Solver
//!
//! A code-breaking assistant for 4-digit, 10-symbol Mastermind using
//! information theory and game theory.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::Solver;
//!
//! let solver = Solver::default();
//! let session = solver.new_session();
//!
//! // Secret 1467 answers 7890 with one digit in the wrong place
//! let guess: Code = "7890".parse().unwrap();
//! let feedback: Feedback = "PWWW".parse().unwrap();
//! let session = solver.submit(&session, guess, feedback).unwrap();
//!
//! let suggestions = solver.recommend(&session, 3);
//! assert!(!suggestions.is_empty());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Mastermind solving algorithms
//!
//! Scoring, guess generation, ranking and simulation on top of the core
//! candidate space, plus the session state they operate on.

mod config;
mod engine;
pub mod entropy;
mod error;
pub mod generator;
pub mod minimax;
mod ranker;
mod scorer;
mod session;
mod simulator;

pub use config::SolverConfig;
pub use engine::Solver;
pub use error::SolverError;
pub use ranker::{Suggestion, safe_guesses};
pub use scorer::{ScoreCache, Scorer, SubsetSignature};
pub use session::{GameSession, GameStatus};
pub use simulator::{WinDistribution, simulate};

//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark, spread_secrets};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, play_game, solve_code};
pub use suggest::{SuggestResult, parse_turn, replay_history, suggest};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

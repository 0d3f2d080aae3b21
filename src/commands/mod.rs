//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use play::{Console, PlayMode, play_codebreaker, play_codemaker, run_session};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_code, solve_code_with, solve_secret};
pub use test_all::{TestAllStatistics, run_test_all};

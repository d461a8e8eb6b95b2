//! Command implementations

pub mod analyze;
pub mod assist;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, WordAnalysis, analyze};
pub use assist::run_assist;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

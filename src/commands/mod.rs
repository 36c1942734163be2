//! Command implementations

pub mod benchmark;
pub mod check;
pub mod hint;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameOutcome, play_with_hints, run_benchmark};
pub use check::{CheckResult, check_guess};
pub use hint::{HintConfig, HintResult, parse_entry, suggest_hints};
pub use simple::run_simple;

//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::{assist_session, run_assist};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{play_game, run_play};
pub use solve::{GuessStep, SolveConfig, SolveOutcome, SolveResult, solve_target, solve_word};

//! Wordle solving
//!
//! Candidate elimination plus greedy guess selection, composed into a
//! per-game session.

mod candidates;
pub mod frequency;
mod session;
pub mod strategy;

pub use candidates::CandidateSet;
pub use session::{SessionState, SolverSession};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};

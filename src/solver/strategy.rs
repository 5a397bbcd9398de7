//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::CandidateSet;
use crate::core::Word;

/// A strategy for selecting the next guess from the surviving candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns a word borrowed from the dictionary, or `None` if no candidate
    /// remains.
    fn select_guess<'a>(&self, candidates: &CandidateSet<'a>) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Unique-letter frequency scoring (default)
    Frequency(FrequencyStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &CandidateSet<'a>) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Greedy letter-frequency strategy
///
/// Picks the surviving candidate whose distinct letters are most common
/// among all survivors. Only possible answers are ever proposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &CandidateSet<'a>) -> Option<&'a Word> {
        super::frequency::select_best_guess(candidates).map(|(word, _)| word)
    }
}

/// Random strategy
///
/// Uniformly picks one of the surviving candidates. A baseline to compare
/// the frequency heuristic against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &CandidateSet<'a>) -> Option<&'a Word> {
        use rand::prelude::IteratorRandom;

        candidates.iter().choose(&mut rand::rng())
    }
}

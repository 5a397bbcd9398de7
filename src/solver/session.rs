//! Stateful solving loop
//!
//! A session owns the candidate set for one game and advances one step per
//! observed (guess, feedback) pair.

use super::candidates::CandidateSet;
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use log::debug;

/// Where a session stands after its latest observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Narrowed,
    /// No candidate remains; no further guesses can be proposed
    Exhausted,
    /// The driver stopped the game (win or attempt budget)
    Done,
}

/// One game's worth of solver state
pub struct SolverSession<'a, S: Strategy> {
    strategy: S,
    candidates: CandidateSet<'a>,
    observed: usize,
    finished: bool,
}

impl<'a, S: Strategy> SolverSession<'a, S> {
    /// Create a session over `dictionary` with every word still possible
    pub fn new(strategy: S, dictionary: &'a [Word]) -> Self {
        Self {
            strategy,
            candidates: CandidateSet::new(dictionary),
            observed: 0,
            finished: false,
        }
    }

    /// Current state, derived from the candidate count unless finished
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.finished {
            return SessionState::Done;
        }
        match self.candidates.remaining_count() {
            0 => SessionState::Exhausted,
            1 => SessionState::Narrowed,
            _ => SessionState::Active,
        }
    }

    /// Propose the next guess
    ///
    /// Returns `None` once the candidate pool is exhausted or the session is
    /// done. The word is borrowed from the dictionary.
    pub fn next_guess(&self) -> Option<&'a Word> {
        if self.finished {
            return None;
        }
        self.strategy.select_guess(&self.candidates)
    }

    /// Feed back the result of a guess and prune the candidates
    ///
    /// Has no effect once the session is done.
    pub fn observe(&mut self, guess: &Word, feedback: Feedback) -> SessionState {
        if self.finished {
            return SessionState::Done;
        }

        let eliminated = self.candidates.filter(guess, feedback);
        self.observed += 1;
        debug!(
            "{guess} -> {feedback}: eliminated {eliminated}, {} candidates remain",
            self.candidates.remaining_count()
        );

        self.state()
    }

    /// Stop the session; later calls to `next_guess` return `None`
    pub fn finish(&mut self) {
        self.finished = true;
    }

    #[must_use]
    pub const fn remaining_count(&self) -> usize {
        self.candidates.remaining_count()
    }

    /// The underlying candidate set
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }

    /// Number of observations applied so far
    #[must_use]
    pub const fn guesses_observed(&self) -> usize {
        self.observed
    }
}

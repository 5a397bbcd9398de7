//! Candidate tracking over a fixed dictionary
//!
//! The dictionary is borrowed and never changes; a mask records which entries
//! are still consistent with every feedback observed so far.

use crate::core::{Feedback, Word};

/// Dictionary words not yet ruled out
///
/// Invariant: `remaining` equals the number of `true` flags in `possible`, and
/// flags only ever go from `true` to `false`.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: &'a [Word],
    possible: Vec<bool>,
    remaining: usize,
}

impl<'a> CandidateSet<'a> {
    /// Start with every dictionary entry possible
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            possible: vec![true; words.len()],
            remaining: words.len(),
        }
    }

    /// Drop every candidate that would not have produced `observed` for `guess`
    ///
    /// A surviving word `w` satisfies `classify(w, guess) == observed`. Since
    /// survivors already matched all earlier feedback, the mask alone carries
    /// the full history. Verdicts for the whole set are computed before any
    /// flag is cleared.
    ///
    /// Returns the number of candidates eliminated by this call.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    /// use wordle_greedy::solver::CandidateSet;
    ///
    /// let words: Vec<Word> = ["crane", "slate", "trace"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut candidates = CandidateSet::new(&words);
    ///
    /// let feedback = Feedback::classify(&words[0], &words[1]);
    /// let eliminated = candidates.filter(&words[1], feedback);
    ///
    /// assert_eq!(eliminated, 2);
    /// assert_eq!(candidates.remaining_count(), 1);
    /// ```
    pub fn filter(&mut self, guess: &Word, observed: Feedback) -> usize {
        let verdicts: Vec<bool> = self
            .words
            .iter()
            .zip(&self.possible)
            .map(|(word, &possible)| possible && Feedback::classify(word, guess) == observed)
            .collect();

        let before = self.remaining;
        for (flag, keep) in self.possible.iter_mut().zip(verdicts) {
            *flag = *flag && keep;
        }
        self.remaining = self.possible.iter().filter(|&&p| p).count();

        before - self.remaining
    }

    /// Number of candidates still possible
    #[inline]
    #[must_use]
    pub const fn remaining_count(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the dictionary entry at `index` is still possible
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.possible.get(index).copied().unwrap_or(false)
    }

    /// The full dictionary this set is a view over
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.words
    }

    /// Iterate surviving words in dictionary order
    ///
    /// Each call re-reads the mask, so the sequence reflects the set at the
    /// time of the call. Items borrow from the dictionary, not from the set.
    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let words = self.words;
        self.possible
            .iter()
            .enumerate()
            .filter(|(_, possible)| **possible)
            .map(move |(i, _)| &words[i])
    }
}

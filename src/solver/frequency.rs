//! Unique-letter frequency scoring
//!
//! Ranks surviving candidates by how common their letters are across the
//! surviving pool. A letter counts once per word, both when building the
//! table and when scoring, so repeats like the Es in EERIE add nothing.

use super::candidates::CandidateSet;
use crate::core::Word;

/// Per-letter counts indexed by alphabet position (0 = 'A')
pub type LetterTable = [u32; 26];

/// Count, for each letter, how many surviving candidates contain it
#[must_use]
pub fn letter_frequencies(candidates: &CandidateSet<'_>) -> LetterTable {
    let mut table = [0u32; 26];
    for word in candidates.iter() {
        for idx in word.unique_letter_indices() {
            table[idx] += 1;
        }
    }
    table
}

/// Sum of table values over the distinct letters of `word`
#[must_use]
pub fn score_word(word: &Word, table: &LetterTable) -> u32 {
    word.unique_letter_indices().map(|idx| table[idx]).sum()
}

/// Select the surviving candidate with the highest frequency score
///
/// Returns `None` when nothing survives and the lone survivor without
/// scoring when exactly one does. Otherwise the first word in dictionary
/// order with the strictly highest score wins, and its score is returned
/// alongside it.
///
/// # Examples
/// ```
/// use wordle_greedy::core::Word;
/// use wordle_greedy::solver::{CandidateSet, frequency::select_best_guess};
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "grape"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates = CandidateSet::new(&words);
///
/// let (best, score) = select_best_guess(&candidates).unwrap();
/// assert_eq!(best.text(), "TRACE");
/// assert_eq!(score, Some(15));
/// ```
#[must_use]
pub fn select_best_guess<'a>(candidates: &CandidateSet<'a>) -> Option<(&'a Word, Option<u32>)> {
    match candidates.remaining_count() {
        0 => None,
        1 => candidates.iter().next().map(|word| (word, None)),
        _ => {
            let table = letter_frequencies(candidates);
            let mut best: Option<(&'a Word, u32)> = None;

            for word in candidates.iter() {
                let score = score_word(word, &table);
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((word, score));
                }
            }

            best.map(|(word, score)| (word, Some(score)))
        }
    }
}

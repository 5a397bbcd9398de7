//! Wordle feedback calculation and representation
//!
//! Feedback is one [`Mark`] per guess position. Its text form uses the
//! letters `G` (correct), `Y` (present) and `X` (absent), and equality is
//! symbol by symbol.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the target (yellow)
    Present,
    /// Letter not in the target, or all its occurrences already consumed (gray)
    Absent,
}

impl Mark {
    /// Encoding character: `G`, `Y` or `X`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Emoji square for sharing
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/`Y`/`X` in either case, `-` and `_` for absent, and the
    /// emoji squares.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Marks a consumed target letter; never equal to an uppercase letter.
const CONSUMED: u8 = b'#';

impl Feedback {
    /// All greens (winning feedback)
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Classify every letter of `guess` against the hidden `target`
    ///
    /// Greens are resolved first and consume their target letter. Remaining
    /// positions are then scanned left to right; each takes the first
    /// unconsumed matching target letter and marks it consumed, so a repeated
    /// guess letter earns at most as many yellows as the target has spare
    /// occurrences, leftmost positions first.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    ///
    /// let target = Word::new("alloy").unwrap();
    /// let guess = Word::new("llama").unwrap();
    ///
    /// let feedback = Feedback::classify(&target, &guess);
    /// assert_eq!(feedback.to_string(), "YGYXX");
    /// ```
    #[must_use]
    pub fn classify(target: &Word, guess: &Word) -> Self {
        let guess = guess.letters();
        let mut working = *target.letters();
        let mut marks = [Mark::Absent; WORD_LENGTH];

        // Allow: index needed to address guess, working buffer and marks together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == working[i] {
                marks[i] = Mark::Correct;
                working[i] = CONSUMED;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(slot) = working.iter_mut().find(|slot| **slot == guess[i]) {
                marks[i] = Mark::Present;
                *slot = CONSUMED;
            }
        }

        Self(marks)
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a winning feedback (all greens)
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GYXXG", "gy-_g" or "🟩🟨⬜⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GYXXG").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GYX").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for mark in &mut marks {
            *mark = Mark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    fn classify(target: &str, guess: &str) -> Feedback {
        Feedback::classify(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["crane", "slate", "eerie", "llama", "aaaaa"] {
            assert_eq!(classify(word, word), Feedback::ALL_CORRECT);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let feedback = classify("crane", "build");
        assert_eq!(feedback, Feedback::new([Absent; WORD_LENGTH]));
        assert_eq!(feedback.to_string(), "XXXXX");
    }

    #[test]
    fn duplicate_guess_letters_consume_target_occurrences() {
        // Target ALLOY: pass 1 greens L at 1; pass 2 gives L at 0 the second L,
        // A at 2 the only A, and leaves A at 4 with nothing to consume.
        let feedback = classify("alloy", "llama");
        assert_eq!(
            feedback,
            Feedback::new([Present, Correct, Present, Absent, Absent])
        );
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // Target has one E at position 4; guess EERIE greens it, so earlier Es get nothing.
        let feedback = classify("crane", "eerie");
        assert_eq!(feedback.to_string(), "XXYXG");
    }

    #[test]
    fn leftmost_duplicate_gets_the_yellow() {
        // One E in SLATE (position 4); SPEED has E at 2 and 3, neither green.
        let feedback = classify("slate", "speed");
        assert_eq!(feedback.to_string(), "GXYXX");
    }

    #[test]
    fn repeated_target_letters_allow_repeated_yellows() {
        // ERASE has two Es, both unmatched by position in SPEED.
        let feedback = classify("erase", "speed");
        assert_eq!(feedback.to_string(), "YXYYX");
    }

    #[test]
    fn mixed_feedback() {
        // CRANE vs target SLATE: A and E green, nothing else shared.
        let feedback = classify("slate", "crane");
        assert_eq!(feedback.to_string(), "XXGXG");
        assert_eq!(feedback.count(Correct), 2);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn parse_accepts_all_notations() {
        let expected = Feedback::new([Correct, Present, Absent, Absent, Correct]);
        assert_eq!(Feedback::parse("GYXXG"), Some(expected));
        assert_eq!(Feedback::parse("gyxxg"), Some(expected));
        assert_eq!(Feedback::parse("gy-_g"), Some(expected));
        assert_eq!(Feedback::parse("🟩🟨⬜⬛🟩"), Some(expected));
        assert_eq!(" GYXXG\n".parse::<Feedback>(), Ok(expected));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Feedback::parse("GYXXGG").is_none());
        assert!(Feedback::parse("GYX").is_none());
        assert!(Feedback::parse("GYZXG").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("nope!".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_and_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Absent, Correct]);
        assert_eq!(feedback.to_string(), "GYXXG");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn win_detection() {
        assert!(Feedback::ALL_CORRECT.is_win());
        assert!(!classify("crane", "trace").is_win());
    }
}

//! Game driver state
//!
//! Owns the hidden target, the attempt budget and the guess history for a
//! single game. Guesses that are malformed or not in the dictionary are
//! rejected without spending an attempt.

use crate::core::{Feedback, Word, WordError};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;

/// Default number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Driver settings shared by the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Seed for target selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: usize, seed: Option<u64>) -> Self {
        Self { max_attempts, seed }
    }

    /// Random number generator for picking targets
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, None)
    }
}

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidWord(WordError),
    NotInWordList(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::NotInWordList(word) => write!(f, "Not in word list: {word}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A single Wordle game
pub struct Game<'a> {
    dictionary: &'a [Word],
    target: &'a Word,
    max_attempts: usize,
    history: Vec<(Word, Feedback)>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game against a known target
    #[must_use]
    pub const fn new(dictionary: &'a [Word], target: &'a Word, max_attempts: usize) -> Self {
        Self {
            dictionary,
            target,
            max_attempts,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a target drawn uniformly from the dictionary
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn with_random_target<R: rand::Rng + ?Sized>(
        dictionary: &'a [Word],
        rng: &mut R,
        max_attempts: usize,
    ) -> Option<Self> {
        let target = dictionary.choose(rng)?;
        Some(Self::new(dictionary, target, max_attempts))
    }

    /// Submit a guess and get its feedback
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the game is over, the guess is not a valid
    /// five-letter word, or it is not in the dictionary. Rejected guesses do
    /// not use up an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(guess.trim())?;
        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        let feedback = Feedback::classify(self.target, &guess);
        self.history.push((guess, feedback));

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.max_attempts {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    #[must_use]
    pub const fn target(&self) -> &'a Word {
        self.target
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["crane", "slate", "trace", "grape", "alloy", "llama"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn correct_guess_wins() {
        let words = dictionary();
        let mut game = Game::new(&words, &words[0], MAX_ATTEMPTS);

        let feedback = game.submit("slate").unwrap();
        assert_eq!(feedback.to_string(), "XXGXG");
        assert_eq!(game.status(), GameStatus::InProgress);

        let feedback = game.submit("crane").unwrap();
        assert!(feedback.is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_used(), 2);
        assert_eq!(game.submit("slate"), Err(GuessError::GameOver));
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let words = dictionary();
        let mut game = Game::new(&words, &words[4], MAX_ATTEMPTS);

        let feedback = game.submit("  LlAmA\n").unwrap();
        assert_eq!(feedback.to_string(), "YGYXX");
        assert_eq!(game.history()[0].0.text(), "LLAMA");
    }

    #[test]
    fn rejected_guesses_do_not_cost_attempts() {
        let words = dictionary();
        let mut game = Game::new(&words, &words[0], MAX_ATTEMPTS);

        assert!(matches!(
            game.submit("cranes"),
            Err(GuessError::InvalidWord(WordError::InvalidLength(6)))
        ));
        assert_eq!(
            game.submit("zebra"),
            Err(GuessError::NotInWordList("ZEBRA".to_string()))
        );
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let words = dictionary();
        let mut game = Game::new(&words, &words[0], 2);

        game.submit("slate").unwrap();
        assert!(!game.is_over());
        game.submit("grape").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.target().text(), "CRANE");
    }

    #[test]
    fn winning_on_last_attempt_counts_as_win() {
        let words = dictionary();
        let mut game = Game::new(&words, &words[0], 1);

        game.submit("crane").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let words = dictionary();
        let mut rng = GameConfig::new(MAX_ATTEMPTS, Some(7)).rng();

        let game = Game::with_random_target(&words, &mut rng, MAX_ATTEMPTS).unwrap();
        assert!(words.iter().any(|w| std::ptr::eq(w, game.target())));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let words = dictionary();
        let config = GameConfig::new(MAX_ATTEMPTS, Some(42));

        let first = Game::with_random_target(&words, &mut config.rng(), 6).unwrap();
        let second = Game::with_random_target(&words, &mut config.rng(), 6).unwrap();
        assert_eq!(first.target(), second.target());
    }

    #[test]
    fn empty_dictionary_has_no_random_game() {
        let words: Vec<Word> = Vec::new();
        let mut rng = GameConfig::default().rng();
        assert!(Game::with_random_target(&words, &mut rng, MAX_ATTEMPTS).is_none());
    }
}

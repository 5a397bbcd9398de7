//! Human play mode
//!
//! Classic Wordle on the terminal against a randomly chosen target.

use crate::core::{WORD_LENGTH, Word, WordError};
use crate::game::{Game, GameConfig, GameStatus, GuessError};
use crate::output::format_attempt;
use anyhow::{Result, anyhow};
use log::debug;
use std::io::{self, BufRead, Write};

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the dictionary is empty or on terminal I/O failure.
pub fn run_play(dictionary: &[Word], config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut game = Game::with_random_target(dictionary, &mut rng, config.max_attempts)
        .ok_or_else(|| anyhow!("Word list is empty"))?;
    debug!("target chosen from {} words", dictionary.len());

    let stdin = io::stdin();
    play_game(&mut game, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Drive `game` from line-based input until it ends or input runs out
///
/// Malformed and unknown words are reported and do not use an attempt.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    mut out: W,
) -> Result<GameStatus> {
    writeln!(out, "\n--- WORDLE GAME ---")?;
    writeln!(
        out,
        "Try to guess the {WORD_LENGTH}-letter word in {} tries.",
        game.max_attempts()
    )?;

    while !game.is_over() {
        write!(
            out,
            "\nTry {}/{}: ",
            game.attempts_used() + 1,
            game.max_attempts()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        match game.submit(guess) {
            Ok(feedback) => {
                if let Some((word, _)) = game.history().last() {
                    writeln!(out, "{}", format_attempt(word, feedback))?;
                }
            }
            Err(GuessError::InvalidWord(WordError::InvalidLength(_))) => {
                writeln!(out, "Invalid length. Must be {WORD_LENGTH} letters.")?;
            }
            Err(GuessError::InvalidWord(_) | GuessError::NotInWordList(_)) => {
                writeln!(out, "Not in word list.")?;
            }
            Err(e @ GuessError::GameOver) => writeln!(out, "{e}")?,
        }
    }

    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "\nWINNER! The word was {}\nSolved in {} tries.",
            game.target(),
            game.attempts_used()
        )?,
        GameStatus::Lost | GameStatus::InProgress => {
            writeln!(out, "\nGAME OVER. The word was {}", game.target())?;
        }
    }

    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn run(input: &str, max_attempts: usize) -> (GameStatus, String) {
        colored::control::set_override(false);

        let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
        let mut game = Game::new(&words, &words[0], max_attempts);
        let mut out = Vec::new();

        let status = play_game(&mut game, Cursor::new(input), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_rejected_guesses() {
        let (status, out) = run("slate\nzebra\ncr\n\ncrane\n", MAX_ATTEMPTS);

        assert_eq!(status, GameStatus::Won);
        assert!(out.contains("Attempt: SLATE  (Feedback: XXGXG)"));
        assert!(out.contains("Not in word list."));
        assert!(out.contains("Invalid length. Must be 5 letters."));
        assert!(out.contains("WINNER! The word was CRANE"));
        assert!(out.contains("Solved in 2 tries."));
        // Rejected guesses leave the attempt counter alone.
        assert!(out.contains("Try 2/6"));
        assert!(!out.contains("Try 3/6"));
    }

    #[test]
    fn losing_reveals_target() {
        let (status, out) = run("slate\ntrace\n", 2);

        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains("GAME OVER. The word was CRANE"));
    }

    #[test]
    fn end_of_input_stops_game() {
        let (status, out) = run("grape\n", MAX_ATTEMPTS);

        assert_eq!(status, GameStatus::InProgress);
        assert!(out.contains("GAME OVER. The word was CRANE"));
    }
}

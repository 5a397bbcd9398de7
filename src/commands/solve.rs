//! Automated solve command
//!
//! Lets the solver play a full game against a target and records each turn.

use crate::core::{Feedback, Word};
use crate::game::{Game, GameConfig, GameStatus};
use crate::solver::{SessionState, SolverSession, Strategy};
use anyhow::{Result, anyhow};
use log::{info, warn};
use rand::prelude::IndexedRandom;

/// Configuration for solving a word
pub struct SolveConfig {
    /// Target to solve; a random dictionary word when `None`
    pub target: Option<String>,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Option<String>, game: GameConfig) -> Self {
        Self { target, game }
    }
}

/// How an automated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    OutOfAttempts,
    /// The solver ran out of candidates before finding the target
    Exhausted,
}

/// Result of solving a word
pub struct SolveResult {
    pub outcome: SolveOutcome,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve the configured target (or a random one) with the given strategy
///
/// # Errors
///
/// Returns an error if the target word is invalid or the dictionary is empty
/// when a random target is requested.
pub fn solve_word<S: Strategy>(
    strategy: S,
    dictionary: &[Word],
    config: &SolveConfig,
) -> Result<SolveResult> {
    let target = match &config.target {
        Some(text) => Word::new(text.as_str()).map_err(|e| anyhow!("Invalid target word: {e}"))?,
        None => dictionary
            .choose(&mut config.game.rng())
            .cloned()
            .ok_or_else(|| anyhow!("Word list is empty"))?,
    };

    if !dictionary.contains(&target) {
        warn!("target {target} is not in the word list; the solver cannot find it");
    }

    solve_target(strategy, dictionary, &target, config.game.max_attempts)
}

/// Play one automated game against a known target
///
/// # Errors
///
/// Returns an error if the game rejects a solver guess, which only happens
/// when the dictionary given to the game and the session differ.
pub fn solve_target<S: Strategy>(
    strategy: S,
    dictionary: &[Word],
    target: &Word,
    max_attempts: usize,
) -> Result<SolveResult> {
    let mut game = Game::new(dictionary, target, max_attempts);
    let mut session = SolverSession::new(strategy, dictionary);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.is_over() {
        let candidates_before = session.remaining_count();

        let Some(guess) = session.next_guess() else {
            info!("solver ran out of candidates for {target}");
            break;
        };

        let feedback = game.submit(guess.text())?;
        let state = session.observe(guess, feedback);

        guesses.push(GuessStep {
            word: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: session.remaining_count(),
        });

        if state == SessionState::Exhausted && !feedback.is_win() {
            break;
        }
    }
    session.finish();

    let outcome = match game.status() {
        GameStatus::Won => SolveOutcome::Solved,
        GameStatus::Lost => SolveOutcome::OutOfAttempts,
        GameStatus::InProgress => SolveOutcome::Exhausted,
    };

    Ok(SolveResult {
        outcome,
        guesses,
        target: target.clone(),
    })
}

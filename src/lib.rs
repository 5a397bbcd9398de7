//! Wordle Greedy
//!
//! A Wordle feedback engine and a greedy solver that always guesses the
//! remaining candidate whose distinct letters are most common.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_greedy::core::{Feedback, Word};
//! use wordle_greedy::solver::{FrequencyStrategy, SessionState, SolverSession};
//! use wordle_greedy::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["crane", "slate", "trace", "grape"]);
//! let mut session = SolverSession::new(FrequencyStrategy, &dictionary);
//!
//! let guess = session.next_guess().unwrap().clone();
//! assert_eq!(guess.text(), "TRACE");
//!
//! let target = Word::new("crane").unwrap();
//! let feedback = Feedback::classify(&target, &guess);
//! assert_eq!(feedback.to_string(), "XGGYG");
//!
//! assert_eq!(session.observe(&guess, feedback), SessionState::Narrowed);
//! assert_eq!(session.next_guess(), Some(&target));
//! ```

// Core domain types
pub mod core;

// Candidate tracking and guess selection
pub mod solver;

// Game rules and attempt budget
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its mark
///
/// Correct letters are green, present letters yellow, absent letters plain.
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let letter = char::from(letter).to_string();
            match mark {
                Mark::Correct => letter.green().bold().to_string(),
                Mark::Present => letter.yellow().bold().to_string(),
                Mark::Absent => letter,
            }
        })
        .collect()
}

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

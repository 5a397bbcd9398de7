//! Assist mode
//!
//! The solver suggests guesses for a game played elsewhere; the user reports
//! the feedback they saw.

use crate::core::{Feedback, Word};
use crate::solver::{SessionState, SolverSession, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run assist mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure.
pub fn run_assist<S: Strategy + Copy>(strategy: S, dictionary: &[Word]) -> Result<()> {
    let stdin = io::stdin();
    assist_session(strategy, dictionary, stdin.lock(), io::stdout().lock())
}

/// Drive an assist session from line-based input
///
/// Each line is one of:
/// - a feedback string (`GYX..`, `gy-__`, or emoji) for the suggested guess
/// - `WORD FEEDBACK` when a different word was played
/// - `win`, `new` or `quit`
///
/// # Errors
///
/// Returns an error on I/O failure.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn assist_session<S, R, W>(strategy: S, dictionary: &[Word], mut input: R, mut out: W) -> Result<()>
where
    S: Strategy + Copy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "Wordle Solver - Assist Mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  G = correct spot, Y = wrong spot, X or - = not in word")?;
    writeln!(out, "  'WORD FEEDBACK' if you played a different word")?;
    writeln!(out, "Commands: 'win', 'new', 'quit'\n")?;

    let mut session = SolverSession::new(strategy, dictionary);
    let mut turn = 1;

    loop {
        let suggestion = session.next_guess();

        match (session.state(), suggestion) {
            (SessionState::Exhausted, _) | (_, None) => {
                writeln!(
                    out,
                    "{}",
                    "❌ No candidates remain! Your feedback may be incorrect.".red()
                )?;
                writeln!(out, "Type 'new' to start over or 'quit' to exit.")?;
            }
            (_, Some(guess)) => {
                writeln!(out, "{}", "─".repeat(60))?;
                writeln!(
                    out,
                    "Turn {turn}: {} candidates remaining",
                    session.remaining_count()
                )?;
                writeln!(out, "Suggested guess: {}", guess.text().bright_white().bold())?;

                if session.remaining_count() <= 10 {
                    let list: Vec<&str> = session.candidates().iter().map(Word::text).collect();
                    writeln!(out, "Candidates: {}", list.join(", "))?;
                }
            }
        }

        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            "new" | "n" => {
                session = SolverSession::new(strategy, dictionary);
                turn = 1;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            "win" | "solved" => {
                writeln!(out, "{}", format!("🎉 Solved in {turn} guesses!").green().bold())?;
                session = SolverSession::new(strategy, dictionary);
                turn = 1;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        let Some((word, feedback)) = parse_report(line, suggestion) else {
            writeln!(out, "❌ Invalid input! Use G/Y/X feedback, 'WORD FEEDBACK', or a command.")?;
            continue;
        };

        if feedback.is_win() {
            writeln!(
                out,
                "{}",
                format!("🎉 {word} solved in {turn} guesses!").green().bold()
            )?;
            session = SolverSession::new(strategy, dictionary);
            turn = 1;
            writeln!(out, "\n🔄 New game started!\n")?;
            continue;
        }

        let before = session.remaining_count();
        session.observe(&word, feedback);
        writeln!(
            out,
            "{word} {}: {before} → {} candidates",
            feedback.to_emoji(),
            session.remaining_count()
        )?;
        turn += 1;
    }
}

/// Parse either `FEEDBACK` (for the suggested word) or `WORD FEEDBACK`
fn parse_report(line: &str, suggestion: Option<&Word>) -> Option<(Word, Feedback)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [feedback] => Some((suggestion?.clone(), Feedback::parse(feedback)?)),
        [word, feedback] => Some((Word::new(*word).ok()?, Feedback::parse(feedback)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        colored::control::set_override(false);

        let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
        let mut out = Vec::new();
        assist_session(FrequencyStrategy, &words, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn narrows_to_target_from_feedback() {
        let out = run("XGGYG\nggggg\nquit\n");

        assert!(out.contains("Suggested guess: TRACE"));
        assert!(out.contains("TRACE ⬜🟩🟩🟨🟩: 4 → 1 candidates"));
        assert!(out.contains("Suggested guess: CRANE"));
        assert!(out.contains("CRANE solved in 2 guesses!"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn accepts_a_different_played_word() {
        let out = run("slate xxgxg\nquit\n");

        assert!(out.contains("SLATE ⬜⬜🟩⬜🟩: 4 → 2 candidates"));
        assert!(out.contains("Candidates: CRANE, GRAPE"));
    }

    #[test]
    fn reports_exhaustion_and_recovers_with_new() {
        let out = run("GGGGX\nnew\nquit\n");

        assert!(out.contains("No candidates remain!"));
        assert!(out.contains("New game started!"));
        assert_eq!(out.matches("Suggested guess: TRACE").count(), 2);
    }

    #[test]
    fn rejects_garbage_input() {
        let out = run("hello world again\nquit\n");
        assert!(out.contains("Invalid input!"));
    }

    #[test]
    fn end_of_input_exits() {
        let out = run("");
        assert!(out.contains("Suggested guess: TRACE"));
    }
}

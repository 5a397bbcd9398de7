//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveOutcome, SolveResult};
use crate::core::{Feedback, Word};
use colored::Colorize;

/// One line describing an accepted guess, e.g. `Attempt: CRANE  (Feedback: XXGXG)`
#[must_use]
pub fn format_attempt(word: &Word, feedback: Feedback) -> String {
    format!(
        "Attempt: {}  (Feedback: {feedback})",
        colored_guess(word, feedback)
    )
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn}: {} {}",
            format_attempt(&step.word, step.feedback),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        ),
        SolveOutcome::OutOfAttempts => println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses. The word was {}",
                result.guesses.len(),
                result.target
            )
            .red()
            .bold()
        ),
        SolveOutcome::Exhausted => println!(
            "{}",
            format!(
                "❌ Solver cannot find more words! The word was {}",
                result.target
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.out_of_attempts + result.exhausted > 0 {
        println!(
            "   Unsolved:         {} ({} out of attempts, {} exhausted)",
            format!("{}", result.out_of_attempts + result.exhausted).red(),
            result.out_of_attempts,
            result.exhausted
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=max_attempts {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Unsolved Words".yellow().bold());
        for word in result.failures.iter().take(10) {
            println!("   {}", word.yellow());
        }
        if result.failures.len() > 10 {
            println!("   ... and {} more", result.failures.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_line_shows_encoded_feedback() {
        colored::control::set_override(false);

        let target = Word::new("crane").unwrap();
        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::classify(&target, &guess);

        assert_eq!(
            format_attempt(&guess, feedback),
            "Attempt: SLATE  (Feedback: XXGXG)"
        );
    }
}

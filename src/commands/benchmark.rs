//! Benchmark command
//!
//! Tests solver performance across multiple words.

use super::solve::{SolveOutcome, solve_target};
use crate::core::Word;
use crate::solver::Strategy;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub out_of_attempts: usize,
    pub exhausted: usize,
    /// Guesses summed over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: FxHashMap<usize, usize>,
    /// Unsolved targets, in input order
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// Every target is an independent game with its own session over the shared
/// dictionary, so games run in parallel; results are aggregated afterwards.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game
/// rejects a solver guess.
pub fn run_benchmark<S: Strategy + Copy + Send + Sync>(
    strategy: S,
    dictionary: &[Word],
    targets: &[Word],
    max_attempts: usize,
) -> Result<BenchmarkResult> {
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results = targets
        .par_iter()
        .map(|target| {
            let result = solve_target(strategy, dictionary, target, max_attempts);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    let mut out_of_attempts = 0;
    let mut exhausted = 0;

    for result in &results {
        match result.outcome {
            SolveOutcome::Solved => {
                *distribution.entry(result.guesses.len()).or_insert(0) += 1;
            }
            SolveOutcome::OutOfAttempts => {
                out_of_attempts += 1;
                failures.push(result.target.text().to_string());
            }
            SolveOutcome::Exhausted => {
                exhausted += 1;
                failures.push(result.target.text().to_string());
            }
        }
    }

    let solved_counts = results
        .iter()
        .filter(|r| r.success())
        .map(|r| r.guesses.len());
    let solved: usize = distribution.values().sum();
    let total_guesses: usize = solved_counts.clone().sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        solved,
        out_of_attempts,
        exhausted,
        total_guesses,
        average_guesses,
        min_guesses: solved_counts.clone().min().unwrap_or(0),
        max_guesses: solved_counts.max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::solver::{FrequencyStrategy, StrategyType};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let dictionary = words_from_slice(WORDS);
        let targets = &dictionary[..20];

        let result = run_benchmark(FrequencyStrategy, &dictionary, targets, MAX_ATTEMPTS).unwrap();

        assert_eq!(result.total_words, 20);
        assert_eq!(result.exhausted, 0);
        assert_eq!(result.solved + result.out_of_attempts, 20);
        assert_eq!(result.failures.len(), result.out_of_attempts);
        assert!(result.max_guesses <= MAX_ATTEMPTS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = words_from_slice(&["crane", "slate", "trace", "grape"]);

        let result = run_benchmark(FrequencyStrategy, &dictionary, &dictionary, MAX_ATTEMPTS).unwrap();

        // TRACE first; CRANE, SLATE and GRAPE each narrow to one candidate.
        assert_eq!(result.solved, 4);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.get(&2), Some(&3));
        assert_eq!(result.total_guesses, 7);
        assert!((result.average_guesses - 1.75).abs() < 1e-9);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 2);
    }

    #[test]
    fn benchmark_counts_targets_outside_dictionary() {
        let dictionary = words_from_slice(&["crane", "slate", "trace", "grape"]);
        let targets = words_from_slice(&["zebra", "crane"]);

        let result = run_benchmark(StrategyType::default(), &dictionary, &targets, MAX_ATTEMPTS).unwrap();

        assert_eq!(result.exhausted, 1);
        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, vec!["ZEBRA".to_string()]);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = words_from_slice(&["crane"]);
        let targets: Vec<Word> = vec![];

        let result = run_benchmark(FrequencyStrategy, &dictionary, &targets, MAX_ATTEMPTS).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.distribution.is_empty());
    }
}

//! Wordle Greedy - CLI
//!
//! Play Wordle, watch the greedy solver play, or let it assist a game
//! played elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use wordle_greedy::{
    commands::{SolveConfig, run_assist, run_benchmark, run_play, solve_word},
    core::Word,
    game::{GameConfig, MAX_ATTEMPTS},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_greedy",
    about = "Wordle with a greedy letter-frequency solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for choosing random targets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show candidate counts and enable debug logging (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a random word (default)
    Play,

    /// Let the solver play against a word
    Solve {
        /// The target word; a random word from the list when omitted
        word: Option<String>,
    },

    /// Get guess suggestions for a game played elsewhere
    Assist,

    /// Run the solver against every word in the list
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?,
    };

    if words.is_empty() {
        bail!("No valid words found in {wordlist}");
    }
    info!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.max_attempts == 0 {
        bail!("--max-attempts must be at least 1");
    }

    let dictionary = load_wordlist(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let game = GameConfig::new(cli.max_attempts, cli.seed);
    debug!("strategy {}, {} attempts", strategy.name(), game.max_attempts);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&dictionary, &game),
        Commands::Solve { word } => {
            let result = solve_word(strategy, &dictionary, &SolveConfig::new(word, game))?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Assist => run_assist(strategy, &dictionary),
        Commands::Benchmark { count } => {
            let count = count.unwrap_or(dictionary.len()).min(dictionary.len());
            println!(
                "Running {} benchmark on {count} words...",
                strategy.name()
            );

            let result = run_benchmark(strategy, &dictionary, &dictionary[..count], game.max_attempts)?;
            print_benchmark_result(&result, game.max_attempts);
            Ok(())
        }
    }
}

//! Wordle - CLI
//!
//! Daily word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::SystemTime;
use wordle_game::{
    commands::run_simple,
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS},
    interactive::{App, GameMode, run_tui},
    wordlists::{
        DICTIONARY, WordSource,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play the puzzle of a given day (days since 2022-01-01) instead of today
    #[arg(short, long, global = true, conflicts_with = "random")]
    day: Option<i64>,

    /// Practice on a random target instead of the daily puzzle
    #[arg(short, long, global = true)]
    random: bool,

    /// Target list: 'embedded' (default) or path to a file of five-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed (1-12)
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_ATTEMPTS as u64)
    )]
    attempts: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,
}

/// Build the word source from the -w flag
///
/// - "embedded": targets and dictionary compiled into the binary
/// - "<path>": targets loaded from file, dictionary still embedded
fn load_source(wordlist_mode: &str) -> Result<WordSource> {
    match wordlist_mode {
        "embedded" => WordSource::embedded().context("embedded word lists"),
        path => {
            let targets = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            WordSource::new(targets, words_from_slice(DICTIONARY))
                .with_context(|| format!("no usable words in {path}"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let source = load_source(&cli.wordlist)?;

    let mode = if cli.random {
        GameMode::Practice
    } else {
        let day = cli
            .day
            .unwrap_or_else(|| WordSource::day_index(SystemTime::now()));
        GameMode::Daily { day }
    };
    let config = GameConfig {
        max_attempts: cli.attempts as usize,
        ..GameConfig::default()
    };
    log::debug!("starting {mode:?} with {} attempts", config.max_attempts);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(&source, mode, config)),
        Commands::Simple => run_simple(&source, mode, config).map_err(|e| anyhow::anyhow!(e)),
    }
}

//! Wordfinder - CLI
//!
//! Wordle-style guessing game with TUI and plain CLI front ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use wordfinder::{
    commands::{run_simple, score_guess},
    dictionary::{Dictionary, WordList},
    game::Game,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordfinder",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for picking secrets, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words at a prompt)
    Simple,

    /// Show the feedback a guess would get against a given secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "embedded" => Ok(WordList::embedded()?),
        path => WordList::from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

/// Install a file-backed tracing subscriber
///
/// The TUI owns the terminal, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn new_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Play => {
            let dictionary = load_wordlist(&cli.wordlist)?;
            info!(words = dictionary.len(), "dictionary loaded");
            run_play_command(&dictionary, new_rng(cli.seed))
        }
        Commands::Simple => {
            let dictionary = load_wordlist(&cli.wordlist)?;
            info!(words = dictionary.len(), "dictionary loaded");
            run_simple_command(&dictionary, new_rng(cli.seed))
        }
    }
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_simple_command(dictionary: &WordList, rng: StdRng) -> Result<()> {
    let mut game = Game::new(dictionary, rng);
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(dictionary: &WordList, rng: StdRng) -> Result<()> {
    use wordfinder::interactive::{App, run_tui};

    let app = App::new(Game::new(dictionary, rng));
    run_tui(app)
}

//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::Dictionary,
    wordlists::{GUESSES, SOLUTIONS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: six guesses, duplicate-letter-correct feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom guess-acceptance list (default: embedded)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<String>,

    /// Path to a custom solution pool (default: embedded)
    #[arg(short = 's', long, global = true)]
    solutions: Option<String>,

    /// RNG seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode
    Simple,
}

/// Load word lists from the -g/-s flags
///
/// Returns (`guess_words`, `solution_words`); either list falls back to the
/// embedded data when no path is given.
fn load_wordlists(guesses: Option<&str>, solutions: Option<&str>) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_game::wordlists::loader::load_from_file;

    let guess_words = match guesses {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(GUESSES),
    };

    let solution_words = match solutions {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(SOLUTIONS),
    };

    Ok((guess_words, solution_words))
}

/// Build the game RNG, seeded explicitly or from the OS
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load word lists based on -g/-s flags
    let (guess_words, solution_words) =
        load_wordlists(cli.guesses.as_deref(), cli.solutions.as_deref())?;
    let dictionary = Dictionary::new(guess_words, solution_words);

    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, rng),
        Commands::Simple => run_simple_command(&dictionary, rng),
    }
}

fn run_play_command(dictionary: &Dictionary, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, rng)?;
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, mut rng: StdRng) -> Result<()> {
    run_simple(dictionary, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

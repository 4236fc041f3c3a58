//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI: one complete word per prompt.

use crate::game::{Dictionary, GameSession, GuessError, MAX_ATTEMPTS, SessionStatus};
use crate::output::{print_board, print_loss, print_win};
use std::io::{self, Write};

/// Run the simple line-based game mode
///
/// Each turn reads a whole 5-letter word; rejected words re-prompt without
/// consuming a guess. Plays again until the player declines.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solution pool is empty.
pub fn run_simple<R: rand::Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Terminal Edition                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in 6 tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - Green:  right letter, right spot");
    println!("  - Yellow: right letter, wrong spot");
    println!("  - Gray:   letter not in the word\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let mut session = GameSession::new(dictionary, rng).map_err(|e| e.to_string())?;

        loop {
            let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts().len() + 1);
            let input = get_user_input(&prompt)?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                word => match session.submit_guess(word) {
                    Ok(outcome) => {
                        print_board(&session);

                        match outcome.status {
                            SessionStatus::Won => {
                                print_win(&session);
                                break;
                            }
                            SessionStatus::Lost => {
                                print_loss(&session);
                                break;
                            }
                            SessionStatus::InProgress => {}
                        }
                    }
                    Err(err @ (GuessError::InvalidLength(_) | GuessError::NotInDictionary(_))) => {
                        println!("❌ {err}\n");
                    }
                    Err(err) => return Err(err.to_string()),
                },
            }
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

//! Display functions for game results

use super::formatters::{attempt_row, keyboard_line, share_grid};
use crate::game::GameSession;
use colored::Colorize;

/// Print the board after an accepted guess: every scored row plus the
/// keyboard hint line
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for attempt in session.attempts() {
        println!("  {}", attempt_row(attempt));
    }
    println!("\n  {}\n", keyboard_line(session.keyboard()));
}

/// Print the victory banner with per-turn flavor
pub fn print_win(session: &GameSession<'_>) {
    let turns = session.attempts().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  Y O U   G O T   T H E   W O R D !  🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let (headline, subtext) = match turns {
        1 => ("🏆 Genius!", "A hole-in-one!"),
        2 => ("⭐ Magnificent!", "Two guesses!"),
        3 => ("💫 Impressive!", "Very well played!"),
        4 => ("✨ Splendid!", "Nice work!"),
        5 => ("👍 Great!", "Got it!"),
        _ => ("😅 Phew!", "That was close!"),
    };

    println!("\n  {}", headline.bright_yellow().bold());
    println!("  {}", subtext.bright_white());
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n{}\n", share_grid(session.attempts()));
}

/// Print the defeat banner, revealing the target
pub fn print_loss(session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{} {}",
        "  Out of guesses! The word was".bright_red().bold(),
        session.target().text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", share_grid(session.attempts()));
}

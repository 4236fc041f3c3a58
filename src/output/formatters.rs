//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterStatus};
use crate::game::KeyboardState;
use colored::{ColoredString, Colorize};

/// Paint one uppercase letter with its feedback color
#[must_use]
pub fn paint_letter(letter: u8, status: LetterStatus) -> ColoredString {
    let text = (letter as char).to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Correct => text.black().on_bright_green(),
        LetterStatus::Present => text.black().on_bright_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unknown => text.normal(),
    }
}

/// Format a scored attempt as a colored row like " A  L  L  O  W "
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .iter()
        .map(|(letter, status)| format!("{} ", paint_letter(letter, status)))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Format the keyboard hints as a single a-z line
///
/// Unknown letters render dimmed so known ones stand out.
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardState) -> String {
    keyboard
        .iter()
        .map(|(letter, status)| {
            let painted = match status {
                LetterStatus::Unknown => (letter as char)
                    .to_ascii_uppercase()
                    .to_string()
                    .dimmed(),
                _ => paint_letter(letter, status),
            };
            format!("{painted} ")
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Format the attempt history as a shareable emoji grid
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(Attempt::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn score(guess: &str, target: &str) -> Attempt {
        Attempt::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn attempt_row_shows_uppercase_letters() {
        let row = attempt_row(&score("crane", "slate"));
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(row.contains(letter), "row missing {letter}: {row}");
        }
    }

    #[test]
    fn keyboard_line_covers_alphabet() {
        let mut keyboard = KeyboardState::new();
        keyboard.record(&score("crane", "slate"));

        let line = keyboard_line(&keyboard);
        for letter in 'A'..='Z' {
            assert!(line.contains(letter), "line missing {letter}");
        }
    }

    #[test]
    fn share_grid_one_row_per_attempt() {
        let attempts = vec![score("crane", "allow"), score("allow", "allow")];
        let grid = share_grid(&attempts);

        assert_eq!(grid.lines().count(), 2);
        assert_eq!(grid.lines().last().unwrap(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_history() {
        assert_eq!(share_grid(&[]), "");
    }
}

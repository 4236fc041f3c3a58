//! Wordle Game
//!
//! A terminal Wordle: six guesses at a hidden 5-letter word with
//! duplicate-letter-correct per-position feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Attempt, LetterStatus, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! // Score the guess
//! let attempt = Attempt::score(&guess, &target);
//! assert_eq!(attempt.statuses()[2], LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Game progression
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

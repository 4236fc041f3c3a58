//! Terminal output formatting
//!
//! Display utilities for the line-based game mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_loss, print_win};

//! Word list loading utilities
//!
//! Converts embedded constants or plain-text files into validated words.
//! Lines that fail validation are skipped rather than failing the whole
//! list, so mixed-length dictionaries can be reused as-is.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-separated text into validated words
///
/// Blank lines and entries that are not valid 5-letter words are skipped.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

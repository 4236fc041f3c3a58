//! Guess acceptance and target selection
//!
//! Holds the two word sets of a game: the broad guess-acceptance set and
//! the curated solution pool. Both are loaded once and read-only afterward.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// The two word sets of a game
///
/// The acceptance set always contains the solution pool, so every word that
/// can be a target can also be guessed.
#[derive(Debug, Clone)]
pub struct Dictionary {
    accepted: FxHashSet<Word>,
    solutions: Vec<Word>,
}

/// Error type for an empty solution pool
///
/// A configuration error: no session can be created until a non-empty pool
/// is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution pool is empty")
    }
}

impl std::error::Error for EmptyPoolError {}

impl Dictionary {
    /// Create a dictionary from a guess list and a solution pool
    ///
    /// The acceptance set becomes the union of both lists, so solutions are
    /// always guessable even if the guess list omits them.
    #[must_use]
    pub fn new(guesses: Vec<Word>, solutions: Vec<Word>) -> Self {
        let mut accepted: FxHashSet<Word> = guesses.into_iter().collect();
        accepted.extend(solutions.iter().cloned());

        Self {
            accepted,
            solutions,
        }
    }

    /// Whether `word` may be submitted as a guess
    ///
    /// True iff the word parses as a 5-letter word (case-insensitive) and is
    /// a member of the acceptance set.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Dictionary;
    /// use wordle_game::wordlists::{GUESSES, SOLUTIONS, loader::words_from_slice};
    ///
    /// let dictionary = Dictionary::new(
    ///     words_from_slice(GUESSES),
    ///     words_from_slice(SOLUTIONS),
    /// );
    /// assert!(dictionary.is_acceptable_guess("CRANE"));
    /// assert!(!dictionary.is_acceptable_guess("zzzzz"));
    /// ```
    #[must_use]
    pub fn is_acceptable_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Whether an already-validated word is in the acceptance set
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Uniformly select one target word from the solution pool
    ///
    /// The random source is injected so games can be replayed
    /// deterministically in tests.
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the solution pool is empty.
    pub fn sample_target<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, EmptyPoolError> {
        use rand::prelude::IndexedRandom;

        self.solutions.choose(rng).cloned().ok_or(EmptyPoolError)
    }

    /// Number of words in the acceptance set
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Number of words in the solution pool
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn test_dictionary() -> Dictionary {
        Dictionary::new(
            words(&["crane", "slate", "lolly", "allow", "geese"]),
            words(&["crane", "allow"]),
        )
    }

    #[test]
    fn accepts_member_words() {
        let dictionary = test_dictionary();
        assert!(dictionary.is_acceptable_guess("crane"));
        assert!(dictionary.is_acceptable_guess("lolly"));
    }

    #[test]
    fn acceptance_is_case_insensitive() {
        let dictionary = test_dictionary();
        assert!(dictionary.is_acceptable_guess("CRANE"));
        assert!(dictionary.is_acceptable_guess("SlAtE"));
    }

    #[test]
    fn rejects_non_members() {
        let dictionary = test_dictionary();
        assert!(!dictionary.is_acceptable_guess("zzzzz"));
    }

    #[test]
    fn rejects_malformed_words() {
        let dictionary = test_dictionary();
        assert!(!dictionary.is_acceptable_guess("cran"));
        assert!(!dictionary.is_acceptable_guess("cranes"));
        assert!(!dictionary.is_acceptable_guess("cr4ne"));
        assert!(!dictionary.is_acceptable_guess(""));
    }

    #[test]
    fn solutions_always_guessable() {
        // "vapor" missing from the guess list still gets accepted
        let dictionary = Dictionary::new(words(&["crane"]), words(&["vapor"]));
        assert!(dictionary.is_acceptable_guess("vapor"));
    }

    #[test]
    fn sample_target_stays_in_pool() {
        let dictionary = test_dictionary();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = dictionary.sample_target(&mut rng).unwrap();
            assert!(target.text() == "crane" || target.text() == "allow");
        }
    }

    #[test]
    fn sample_target_is_deterministic_per_seed() {
        let dictionary = test_dictionary();

        let a = dictionary
            .sample_target(&mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = dictionary
            .sample_target(&mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let dictionary = Dictionary::new(words(&["crane"]), Vec::new());
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(dictionary.sample_target(&mut rng), Err(EmptyPoolError));
    }

    #[test]
    fn counts_reflect_union() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.accepted_count(), 5);
        assert_eq!(dictionary.solution_count(), 2);
    }
}

//! Game session state machine
//!
//! One session owns one game: the target word, the ordered attempt history,
//! the aggregated keyboard hints, and the win/loss status. Sessions are
//! created fresh per game and discarded; there is no in-place reset.

use super::dictionary::{Dictionary, EmptyPoolError};
use super::keyboard::KeyboardState;
use crate::core::{Attempt, Word};
use std::fmt;

/// Maximum number of accepted guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting guesses
    InProgress,
    /// The latest attempt matched the target (terminal)
    Won,
    /// Six attempts used without a win (terminal)
    Lost,
}

/// Why a submission was rejected
///
/// A rejected submission leaves the session untouched and does not consume
/// a turn; the caller is expected to re-prompt the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The game is already won or lost
    SessionTerminated,
    /// The guess is not exactly 5 characters
    InvalidLength(usize),
    /// The guess is not in the acceptance set
    NotInDictionary(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionTerminated => write!(f, "The game is over"),
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly 5 letters, got {len}")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// What an accepted submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Session status after the attempt was applied
    pub status: SessionStatus,
    /// The scored attempt, for rendering
    pub attempt: Attempt,
}

/// One game in progress
///
/// Borrows the shared read-only [`Dictionary`]; independent games use
/// separate sessions over the same dictionary.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::game::{Dictionary, GameSession};
/// use wordle_game::wordlists::{GUESSES, SOLUTIONS, loader::words_from_slice};
///
/// let dictionary = Dictionary::new(
///     words_from_slice(GUESSES),
///     words_from_slice(SOLUTIONS),
/// );
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut session = GameSession::new(&dictionary, &mut rng).unwrap();
///
/// let outcome = session.submit_guess("crane").unwrap();
/// assert_eq!(session.attempts().len(), 1);
/// assert_eq!(outcome.status, session.status());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    attempts: Vec<Attempt>,
    keyboard: KeyboardState,
    status: SessionStatus,
}

impl<'a> GameSession<'a> {
    /// Start a new game, sampling the target from the solution pool
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the dictionary's solution pool is empty.
    pub fn new<R: rand::Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rng: &mut R,
    ) -> Result<Self, EmptyPoolError> {
        let target = dictionary.sample_target(rng)?;
        Ok(Self::with_target(dictionary, target))
    }

    /// Start a new game against a known target
    ///
    /// Used for deterministic replay; the normal path is [`GameSession::new`].
    #[must_use]
    pub fn with_target(dictionary: &'a Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            attempts: Vec::new(),
            keyboard: KeyboardState::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Submit one complete guess word
    ///
    /// Preconditions are checked in order; the first failure rejects the
    /// call without touching the session:
    /// 1. the session must still be in progress,
    /// 2. the word must be exactly 5 characters,
    /// 3. the word must be in the acceptance set.
    ///
    /// On success the attempt is scored, appended to history, folded into
    /// the keyboard state, and the status re-evaluated.
    ///
    /// # Errors
    /// Returns `GuessError` describing the rejected precondition.
    pub fn submit_guess(&mut self, word: &str) -> Result<SubmitOutcome, GuessError> {
        if self.status != SessionStatus::InProgress {
            return Err(GuessError::SessionTerminated);
        }

        let len = word.chars().count();
        if len != 5 {
            return Err(GuessError::InvalidLength(len));
        }

        let guess = Word::new(word)
            .ok()
            .filter(|w| self.dictionary.contains(w))
            .ok_or_else(|| GuessError::NotInDictionary(word.to_string()))?;

        let attempt = Attempt::score(&guess, &self.target);
        self.attempts.push(attempt.clone());
        self.keyboard.record(&attempt);

        if attempt.is_winning() {
            self.status = SessionStatus::Won;
        } else if self.attempts.len() == MAX_ATTEMPTS {
            self.status = SessionStatus::Lost;
        }

        Ok(SubmitOutcome {
            status: self.status,
            attempt,
        })
    }

    /// The target word
    ///
    /// Presentation reveals it only once the game is lost.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The scored attempts so far, in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Current session status
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Aggregated keyboard hints
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Whether the session reached a terminal state
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, SessionStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn test_dictionary() -> Dictionary {
        Dictionary::new(
            words(&[
                "crane", "slate", "irate", "grate", "lolly", "allow", "blimp", "speed",
            ]),
            words(&["allow"]),
        )
    }

    fn session(dictionary: &Dictionary) -> GameSession<'_> {
        GameSession::with_target(dictionary, Word::new("allow").unwrap())
    }

    #[test]
    fn new_session_samples_from_pool() {
        let dictionary = test_dictionary();
        let mut rng = StdRng::seed_from_u64(3);

        let session = GameSession::new(&dictionary, &mut rng).unwrap();
        assert_eq!(session.target().text(), "allow");
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn empty_pool_fails_session_creation() {
        let dictionary = Dictionary::new(words(&["crane"]), Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        assert!(GameSession::new(&dictionary, &mut rng).is_err());
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        let outcome = session.submit_guess("allow").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
        assert!(outcome.attempt.is_winning());
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.is_over());
    }

    #[test]
    fn six_misses_lose_exactly_on_the_sixth() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        for turn in 1..=5 {
            let outcome = session.submit_guess("crane").unwrap();
            assert_eq!(outcome.status, SessionStatus::InProgress, "turn {turn}");
        }

        let outcome = session.submit_guess("crane").unwrap();
        assert_eq!(outcome.status, SessionStatus::Lost);
        assert_eq!(session.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn win_on_the_sixth_attempt_is_a_win() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        for _ in 0..5 {
            session.submit_guess("crane").unwrap();
        }

        let outcome = session.submit_guess("allow").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
    }

    #[test]
    fn rejected_length_is_a_no_op() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);
        session.submit_guess("crane").unwrap();

        let before_keyboard = session.keyboard().clone();
        let err = session.submit_guess("cranes").unwrap_err();

        assert_eq!(err, GuessError::InvalidLength(6));
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.keyboard(), &before_keyboard);
    }

    #[test]
    fn rejected_dictionary_miss_is_a_no_op() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        let before_keyboard = session.keyboard().clone();
        let err = session.submit_guess("zzzzz").unwrap_err();

        assert_eq!(err, GuessError::NotInDictionary("zzzzz".to_string()));
        assert!(session.attempts().is_empty());
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.keyboard(), &before_keyboard);
    }

    #[test]
    fn malformed_word_of_right_length_is_not_in_dictionary() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        let err = session.submit_guess("cr4ne").unwrap_err();
        assert!(matches!(err, GuessError::NotInDictionary(_)));
    }

    #[test]
    fn terminal_sessions_reject_everything() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);
        session.submit_guess("allow").unwrap();

        // Terminated wins over the other preconditions
        assert_eq!(
            session.submit_guess("crane").unwrap_err(),
            GuessError::SessionTerminated
        );
        assert_eq!(
            session.submit_guess("cranes").unwrap_err(),
            GuessError::SessionTerminated
        );
        assert_eq!(
            session.submit_guess("zzzzz").unwrap_err(),
            GuessError::SessionTerminated
        );
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn lost_session_is_terminal_too() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        for _ in 0..6 {
            session.submit_guess("crane").unwrap();
        }
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(
            session.submit_guess("allow").unwrap_err(),
            GuessError::SessionTerminated
        );
        assert_eq!(session.attempts().len(), 6);
    }

    #[test]
    fn acceptance_is_case_insensitive() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        let outcome = session.submit_guess("ALLOW").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
    }

    #[test]
    fn keyboard_accumulates_across_attempts() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        session.submit_guess("lolly").unwrap();
        assert_eq!(session.keyboard().hint(b'l'), LetterStatus::Correct);
        assert_eq!(session.keyboard().hint(b'o'), LetterStatus::Present);

        session.submit_guess("crane").unwrap();
        assert_eq!(session.keyboard().hint(b'a'), LetterStatus::Present);
        assert_eq!(session.keyboard().hint(b'c'), LetterStatus::Absent);
        // Earlier knowledge survives
        assert_eq!(session.keyboard().hint(b'l'), LetterStatus::Correct);
    }

    #[test]
    fn attempts_remaining_counts_down() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        assert_eq!(session.attempts_remaining(), 6);
        session.submit_guess("crane").unwrap();
        assert_eq!(session.attempts_remaining(), 5);

        // Rejections don't consume a turn
        let _ = session.submit_guess("zzzzz");
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn target_never_changes() {
        let dictionary = test_dictionary();
        let mut session = session(&dictionary);

        session.submit_guess("crane").unwrap();
        session.submit_guess("slate").unwrap();
        assert_eq!(session.target().text(), "allow");
    }
}

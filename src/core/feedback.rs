//! Guess feedback calculation and representation
//!
//! Scoring a guess against the target yields one status per position:
//! - `Correct` (green): letter in the right position
//! - `Present` (yellow): letter in the word, wrong position
//! - `Absent` (gray): letter not in the word, after duplicates are accounted for
//!
//! `Unknown` exists only for keyboard aggregation and never appears in a
//! scored attempt.

use super::Word;
use super::word::letter_index;

/// Best-known status of a letter
///
/// The variant order is the information order: a later observation may only
/// upgrade a letter's status, never downgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// No information yet (keyboard aggregation only)
    Unknown,
    /// The letter does not occur in the target
    Absent,
    /// The letter occurs in the target at a different position
    Present,
    /// The letter occupies this exact position in the target
    Correct,
}

/// One scored guess: five position-ordered (letter, status) pairs
///
/// Immutable once produced by [`Attempt::score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    letters: [u8; 5],
    statuses: [LetterStatus; 5],
}

impl Attempt {
    /// Score `guess` against `target`
    ///
    /// Pure and deterministic. Implements Wordle's exact feedback rules,
    /// including proper handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and consume those letters
    ///    from the target's remaining-count table
    /// 2. Second pass, left to right: mark present-but-misplaced (yellows)
    ///    from the remaining pool, consuming counts; everything else is gray
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Attempt, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let attempt = Attempt::score(&guess, &target);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(attempt.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(attempt.statuses()[4], LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; 5];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches consume the letter
        for i in 0..5 {
            if guess.char_at(i) == target.char_at(i) {
                statuses[i] = LetterStatus::Correct;
                remaining[letter_index(guess.char_at(i))] -= 1;
            }
        }

        // Second pass: misplaced letters, while the pool lasts
        for i in 0..5 {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            let idx = letter_index(guess.char_at(i));
            if remaining[idx] > 0 {
                statuses[i] = LetterStatus::Present;
                remaining[idx] -= 1;
            }
        }

        Self {
            letters: *guess.chars(),
            statuses,
        }
    }

    /// The guessed letters in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; 5] {
        &self.letters
    }

    /// The per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; 5] {
        &self.statuses
    }

    /// Iterate the (letter, status) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.letters.iter().copied().zip(self.statuses)
    }

    /// Whether every position is `Correct` (a winning attempt)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// The guessed word as text
    ///
    /// # Panics
    /// Will not panic - the letters are validated ASCII by construction.
    #[must_use]
    pub fn word(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters are validated ASCII")
    }

    /// Render the attempt as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterStatus::{Absent, Correct, Present};

    fn score(guess: &str, target: &str) -> Attempt {
        Attempt::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn status_rank_order() {
        assert!(LetterStatus::Unknown < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn exact_match_all_green() {
        let attempt = score("crane", "crane");
        assert_eq!(attempt.statuses(), &[Correct; 5]);
        assert!(attempt.is_winning());
    }

    #[test]
    fn disjoint_letters_all_gray() {
        let attempt = score("blimp", "crane");
        assert_eq!(attempt.statuses(), &[Absent; 5]);
        assert!(!attempt.is_winning());
    }

    #[test]
    fn statuses_never_unknown() {
        for target in ["crane", "allow", "speed", "aaaaa"] {
            let attempt = score("lolly", target);
            assert!(
                attempt
                    .statuses()
                    .iter()
                    .all(|&s| s != LetterStatus::Unknown)
            );
        }
    }

    #[test]
    fn duplicate_guess_letters_golden() {
        // LOLLY vs ALLOW: the target has two Ls (positions 1, 2).
        // Position 2 matches exactly and consumes one; position 0's L takes
        // the other; position 3's L finds the pool empty.
        let attempt = score("lolly", "allow");
        assert_eq!(attempt.statuses(), &[Present, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn excess_duplicates_are_gray() {
        // GEESE vs THOSE: three Es in the guess, one in the target. The
        // exact match at position 4 consumes it; both earlier Es are gray.
        let attempt = score("geese", "those");
        assert_eq!(attempt.statuses(), &[Absent, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S is misplaced, both Es are misplaced (ERASE has
        // two), P and D are absent.
        let attempt = score("speed", "erase");
        assert_eq!(attempt.statuses(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O is misplaced, second O is an exact match.
        let attempt = score("robot", "floor");
        assert_eq!(attempt.statuses(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn scoring_is_pure() {
        let guess = Word::new("lolly").unwrap();
        let target = Word::new("allow").unwrap();

        let first = Attempt::score(&guess, &target);
        let second = Attempt::score(&guess, &target);

        assert_eq!(first, second);
        // Inputs are untouched
        assert_eq!(guess.text(), "lolly");
        assert_eq!(target.text(), "allow");
    }

    #[test]
    fn self_score_always_wins() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Attempt::score(&w, &w).is_winning());
        }
    }

    #[test]
    fn attempt_word_round_trips() {
        let attempt = score("lolly", "allow");
        assert_eq!(attempt.word(), "lolly");
        assert_eq!(attempt.letters(), b"lolly");
    }

    #[test]
    fn attempt_iter_pairs() {
        let attempt = score("crane", "slate");
        let pairs: Vec<(u8, LetterStatus)> = attempt.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[2], (b'a', Correct));
        assert_eq!(pairs[0], (b'c', Absent));
    }

    #[test]
    fn attempt_to_emoji() {
        let attempt = score("crane", "slate");
        assert_eq!(attempt.to_emoji(), "⬜⬜🟩⬜🟩");

        let win = score("crane", "crane");
        assert_eq!(win.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}

//! Best-ever feedback per letter, as shown on an on-screen keyboard

use super::feedback::{FeedbackRow, LetterFeedback};
use super::word::{ALPHABET_SIZE, Word, index_letter, letter_index};

/// Per-letter best outcome across a guess history
///
/// Upgrades follow `LetterFeedback` precedence and never downgrade, so folding
/// a history row by row gives the same result as rebuilding it from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardAggregate {
    letters: [Option<LetterFeedback>; ALPHABET_SIZE],
}

impl KeyboardAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the aggregate from a full history
    #[must_use]
    pub fn from_history(history: &[(Word, FeedbackRow)]) -> Self {
        history.iter().fold(Self::new(), |mut keys, (guess, row)| {
            keys.record(guess, row);
            keys
        })
    }

    /// Fold one guess and its feedback into the aggregate
    pub fn record(&mut self, guess: &Word, row: &FeedbackRow) {
        for (&letter, &outcome) in guess.chars().iter().zip(row.cells()) {
            self.upgrade(letter, outcome);
        }
    }

    /// Raise a single letter to `outcome` if that outranks what is recorded
    ///
    /// Bytes that are not ASCII letters are ignored.
    pub fn upgrade(&mut self, letter: u8, outcome: LetterFeedback) {
        if !letter.is_ascii_alphabetic() {
            return;
        }
        let slot = &mut self.letters[letter_index(letter.to_ascii_lowercase())];
        *slot = Some(slot.map_or(outcome, |current| current.max(outcome)));
    }

    /// Best outcome seen for `letter`, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterFeedback> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters[letter_index(letter.to_ascii_lowercase())]
    }

    pub fn clear(&mut self) {
        self.letters = [None; ALPHABET_SIZE];
    }

    /// Iterate over guessed letters with their best outcome
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterFeedback)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(i, state)| state.map(|outcome| (index_letter(i), outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn history(secret: &str, guesses: &[&str]) -> Vec<(Word, FeedbackRow)> {
        let secret = Word::new(secret).unwrap();
        guesses
            .iter()
            .map(|g| {
                let guess = Word::new(*g).unwrap();
                let row = evaluate(&guess, &secret);
                (guess, row)
            })
            .collect()
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut keys = KeyboardAggregate::new();
        keys.upgrade(b'a', LetterFeedback::Correct);
        keys.upgrade(b'a', LetterFeedback::Absent);
        keys.upgrade(b'a', LetterFeedback::Present);
        assert_eq!(keys.get(b'a'), Some(LetterFeedback::Correct));
    }

    #[test]
    fn unguessed_letters_are_none() {
        let keys = KeyboardAggregate::from_history(&history("crane", &["slate"]));
        assert_eq!(keys.get(b'z'), None);
        assert_eq!(keys.get(b's'), Some(LetterFeedback::Absent));
        assert_eq!(keys.get(b'a'), Some(LetterFeedback::Correct));
        assert_eq!(keys.get(b'E'), Some(LetterFeedback::Correct));
    }

    #[test]
    fn duplicate_letter_keeps_best_outcome() {
        // The second E in EERIE is green even though the first is absent
        let keys = KeyboardAggregate::from_history(&history("crane", &["eerie"]));
        assert_eq!(keys.get(b'e'), Some(LetterFeedback::Correct));
    }

    #[test]
    fn incremental_matches_rebuild() {
        let rows = history("stare", &["crane", "slate", "state"]);
        let mut incremental = KeyboardAggregate::new();
        for (guess, row) in &rows {
            incremental.record(guess, row);
        }
        assert_eq!(incremental, KeyboardAggregate::from_history(&rows));
        assert_eq!(incremental.iter().count(), 8);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut keys = KeyboardAggregate::new();
        keys.upgrade(b'1', LetterFeedback::Correct);
        keys.upgrade(b' ', LetterFeedback::Present);
        assert_eq!(keys.get(b'1'), None);
        assert_eq!(keys.get(b'{'), None);
        assert_eq!(keys.iter().count(), 0);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keys = KeyboardAggregate::from_history(&history("crane", &["react"]));
        keys.clear();
        assert_eq!(keys.iter().count(), 0);
    }
}

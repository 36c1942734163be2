//! Constraints derived from a guess history
//!
//! Folds every (guess, feedback) row into positional knowledge and inclusive
//! per-letter count bounds. Duplicate letters are handled through the bounds:
//! a letter can be known present and also capped in count after a row that
//! repeats it.

use crate::core::{
    ALPHABET_SIZE, FeedbackRow, LetterFeedback, WORD_LENGTH, Word, index_letter, letter_index,
};

/// Set of letters as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Positional and count constraints implied by a history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    must: [Option<u8>; WORD_LENGTH],
    forbidden: [LetterSet; WORD_LENGTH],
    min_count: [u8; ALPHABET_SIZE],
    max_count: [u8; ALPHABET_SIZE],
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            must: [None; WORD_LENGTH],
            forbidden: [LetterSet::default(); WORD_LENGTH],
            min_count: [0; ALPHABET_SIZE],
            max_count: [WORD_LENGTH as u8; ALPHABET_SIZE],
        }
    }
}

impl Constraints {
    /// Derive constraints from the full history
    ///
    /// Per row: greens pin their position, yellows forbid theirs, the row's
    /// hit count raises the letter's minimum, and any absent copy caps the
    /// maximum at that hit count. After all rows, letters that were guessed
    /// but never hit anywhere get a maximum of zero and are forbidden at every
    /// position they were tried.
    ///
    /// # Examples
    /// ```
    /// use hardword::core::{Word, evaluate};
    /// use hardword::solver::Constraints;
    ///
    /// let secret = Word::new("hello").unwrap();
    /// let guess = Word::new("level").unwrap();
    /// let row = evaluate(&guess, &secret);
    ///
    /// let c = Constraints::derive(&[(guess, row)]);
    /// assert_eq!(c.must(1), Some(b'e'));
    /// assert_eq!(c.min_count(b'l'), 2);
    /// assert_eq!(c.max_count(b'e'), 1);
    /// assert_eq!(c.max_count(b'v'), 0);
    /// ```
    #[must_use]
    pub fn derive(history: &[(Word, FeedbackRow)]) -> Self {
        let mut c = Self::default();
        let mut ever_hit = LetterSet::default();

        for (guess, row) in history {
            let mut hits = [0u8; ALPHABET_SIZE];
            let mut total = [0u8; ALPHABET_SIZE];

            for (i, (&letter, &outcome)) in guess.chars().iter().zip(row.cells()).enumerate() {
                let idx = letter_index(letter);
                total[idx] += 1;
                match outcome {
                    LetterFeedback::Correct => {
                        c.must[i] = Some(letter);
                        hits[idx] += 1;
                        ever_hit.insert(letter);
                    }
                    LetterFeedback::Present => {
                        c.forbidden[i].insert(letter);
                        hits[idx] += 1;
                        ever_hit.insert(letter);
                    }
                    LetterFeedback::Absent => {}
                }
            }

            for idx in 0..ALPHABET_SIZE {
                c.min_count[idx] = c.min_count[idx].max(hits[idx]);
                if total[idx] > hits[idx] {
                    c.max_count[idx] = c.max_count[idx].min(hits[idx]);
                }
            }
        }

        // Only after every row: a later hit overrides an earlier absence
        for (guess, row) in history {
            for (i, (&letter, &outcome)) in guess.chars().iter().zip(row.cells()).enumerate() {
                if outcome == LetterFeedback::Absent && !ever_hit.contains(letter) {
                    c.max_count[letter_index(letter)] = 0;
                    c.forbidden[i].insert(letter);
                }
            }
        }

        c
    }

    /// Letter required at `position`, if revealed
    #[inline]
    #[must_use]
    pub const fn must(&self, position: usize) -> Option<u8> {
        self.must[position]
    }

    /// Letters known not to occupy `position`
    #[inline]
    #[must_use]
    pub const fn forbidden(&self, position: usize) -> LetterSet {
        self.forbidden[position]
    }

    #[inline]
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    #[inline]
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> u8 {
        self.max_count[letter_index(letter)]
    }

    /// Required positions as (position, letter) pairs
    pub fn required_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.must
            .iter()
            .enumerate()
            .filter_map(|(i, letter)| letter.map(|l| (i, l)))
    }

    /// Letters with a positive minimum, as (letter, minimum) pairs
    pub fn required_letters(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.min_count
            .iter()
            .enumerate()
            .filter(|&(_, &min)| min > 0)
            .map(|(i, &min)| (index_letter(i), min))
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// This is the candidate filter: pinned and forbidden positions, then
    /// inclusive count bounds for all letters.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(i, &letter)| {
            self.must[i].is_none_or(|required| required == letter)
                && !self.forbidden[i].contains(letter)
        });
        if !positions_ok {
            return false;
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&n, (&min, &max))| min <= n && n <= max)
    }
}

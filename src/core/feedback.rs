//! Per-letter feedback and the guess evaluator
//!
//! A feedback row holds one outcome per position of the guess that produced it:
//! - Absent (letter not in the secret, subject to count bounds)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the right position)

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Outcome for a single guessed letter
///
/// Variants are ordered by precedence: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// True for Correct and Present
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Single-character code used by `FeedbackRow::from_str`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square emoji for the outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, aligned positionally with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([LetterFeedback; WORD_LENGTH]);

impl FeedbackRow {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(cells: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(cells)
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Count the number of present-elsewhere letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    /// Count the number of absent letters
    #[must_use]
    pub fn count_absent(&self) -> usize {
        self.count(LetterFeedback::Absent)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&cell| cell == kind).count()
    }

    /// Parse a row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use hardword::core::FeedbackRow;
    ///
    /// let p1 = FeedbackRow::from_str("GY-GY").unwrap();
    /// let p2 = FeedbackRow::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Ergonomic Option API; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut cells = [LetterFeedback::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return None;
            }
            cells[len] = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => LetterFeedback::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(cells))
    }

    /// Convert row to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|cell| cell.emoji()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements the duplicate-aware two-pass rule: exact matches are marked
/// first and consume their letter; remaining guess letters are marked present
/// only while unmatched copies of that letter remain in the secret. Both words
/// are already case-normalized by `Word`.
///
/// # Examples
/// ```
/// use hardword::core::{Word, LetterFeedback::*, evaluate};
///
/// let guess = Word::new("level").unwrap();
/// let secret = Word::new("hello").unwrap();
/// let row = evaluate(&guess, &secret);
///
/// assert_eq!(row.cells(), &[Present, Correct, Absent, Absent, Present]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> FeedbackRow {
    let mut cells = [LetterFeedback::Absent; WORD_LENGTH];
    let mut available = [0u8; ALPHABET_SIZE];

    // First pass: greens, and count the secret letters they did not consume
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            cells[i] = LetterFeedback::Correct;
        } else {
            available[letter_index(s)] += 1;
        }
    }

    // Second pass: yellows from what is left
    for (cell, &g) in cells.iter_mut().zip(guess.chars()) {
        if *cell == LetterFeedback::Correct {
            continue;
        }
        let slot = &mut available[letter_index(g)];
        if *slot > 0 {
            *cell = LetterFeedback::Present;
            *slot -= 1;
        }
    }

    FeedbackRow(cells)
}

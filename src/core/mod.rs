//! Core domain types for the word game
//!
//! Words, per-letter feedback, the evaluator, and the keyboard aggregate.
//! Everything here is pure and synchronous.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{FeedbackRow, LetterFeedback, evaluate};
pub use keyboard::KeyboardAggregate;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, index_letter, letter_index};

/// Maximum number of guesses in one game
pub const MAX_TURNS: usize = 6;

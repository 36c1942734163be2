//! Candidate filtering and letter-frequency hint scoring
//!
//! Hints are a cheap approximation: words that spread the most common
//! remaining letters score highest. There is no lookahead.

use super::constraints::Constraints;
use crate::core::{ALPHABET_SIZE, FeedbackRow, Word, letter_index};

/// Number of suggestions shown when the caller does not ask for a specific count
pub const DEFAULT_HINT_COUNT: usize = 5;

/// Hint engine over a fixed corpus
///
/// Holds a borrowed corpus of candidate words; every query is a pure function
/// of that corpus and the history passed in.
#[derive(Debug, Clone, Copy)]
pub struct HintEngine<'a> {
    corpus: &'a [Word],
}

impl<'a> HintEngine<'a> {
    #[must_use]
    pub const fn new(corpus: &'a [Word]) -> Self {
        Self { corpus }
    }

    /// Corpus words consistent with every row of `history`, in corpus order
    #[must_use]
    pub fn candidates(&self, history: &[(Word, FeedbackRow)]) -> Vec<&'a Word> {
        let constraints = Constraints::derive(history);
        self.corpus
            .iter()
            .filter(|word| constraints.admits(word))
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(Word, FeedbackRow)]) -> usize {
        let constraints = Constraints::derive(history);
        self.corpus.iter().filter(|word| constraints.admits(word)).count()
    }

    /// Up to `k` best-scoring candidates that have not been guessed yet
    ///
    /// Returns an empty list when no corpus word is consistent with the history.
    #[must_use]
    pub fn suggest(&self, history: &[(Word, FeedbackRow)], k: usize) -> Vec<&'a Word> {
        let candidates = self.candidates(history);
        if candidates.is_empty() {
            return Vec::new();
        }

        score_candidates(&candidates)
            .into_iter()
            .map(|(word, _)| word)
            .filter(|word| !history.iter().any(|(guess, _)| guess == *word))
            .take(k)
            .collect()
    }
}

/// Number of words containing each letter at least once
#[must_use]
pub fn letter_presence(words: &[&Word]) -> [usize; ALPHABET_SIZE] {
    let mut freq = [0usize; ALPHABET_SIZE];
    for word in words {
        let counts = word.letter_counts();
        for (slot, &n) in freq.iter_mut().zip(&counts) {
            if n > 0 {
                *slot += 1;
            }
        }
    }
    freq
}

/// Score and rank candidates, best first
///
/// A word scores the presence frequency of each distinct letter it contains,
/// minus one for every repeated letter. Equal scores keep candidate order.
#[must_use]
pub fn score_candidates<'w>(candidates: &[&'w Word]) -> Vec<(&'w Word, i64)> {
    let freq = letter_presence(candidates);

    let mut scored: Vec<(&Word, i64)> = candidates
        .iter()
        .map(|&word| (word, score_word(word, &freq)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

fn score_word(word: &Word, freq: &[usize; ALPHABET_SIZE]) -> i64 {
    let mut seen = [false; ALPHABET_SIZE];
    let mut score = 0i64;
    for &letter in word.chars() {
        let idx = letter_index(letter);
        if seen[idx] {
            score -= 1;
        } else {
            seen[idx] = true;
            score += freq[idx] as i64;
        }
    }
    score
}

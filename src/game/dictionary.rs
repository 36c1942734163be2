//! Dictionary capability: guess acceptance and secret selection
//!
//! `WordList` is the base secret source. The permissive and allow-list variants
//! wrap a secret source and override only validation.

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Membership oracle plus secret picker
pub trait Dictionary {
    /// Whether a well-formed guess is accepted
    fn is_valid_word(&self, word: &Word) -> bool;

    /// Pick a secret for a new game
    fn random_secret(&self) -> Word;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, word: &Word) -> bool {
        (**self).is_valid_word(word)
    }

    fn random_secret(&self) -> Word {
        (**self).random_secret()
    }
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Word list contains no valid five-letter words")]
    Empty,
}

/// Curated word list: accepts only its own words, picks secrets uniformly
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    members: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let members = words.iter().cloned().collect();
        Ok(Self { words, members })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    fn random_secret(&self) -> Word {
        let index = rand::rng().random_range(0..self.words.len());
        self.words[index].clone()
    }
}

/// Accepts any well-formed five-letter word
#[derive(Debug, Clone)]
pub struct OpenDictionary<D> {
    secret_source: D,
}

impl<D: Dictionary> OpenDictionary<D> {
    pub const fn new(secret_source: D) -> Self {
        Self { secret_source }
    }
}

impl<D: Dictionary> Dictionary for OpenDictionary<D> {
    fn is_valid_word(&self, _word: &Word) -> bool {
        // Word construction already enforced five ASCII letters
        true
    }

    fn random_secret(&self) -> Word {
        self.secret_source.random_secret()
    }
}

/// Accepts words from a large allow-list; secrets still come from the wrapped source
#[derive(Debug, Clone)]
pub struct AllowListDictionary<D> {
    secret_source: D,
    allowed: FxHashSet<Word>,
}

impl<D: Dictionary> AllowListDictionary<D> {
    /// # Errors
    /// Returns `DictionaryError::Empty` if the allow-list is empty.
    pub fn new(
        secret_source: D,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        let allowed: FxHashSet<Word> = allowed.into_iter().collect();
        if allowed.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self {
            secret_source,
            allowed,
        })
    }
}

impl<D: Dictionary> Dictionary for AllowListDictionary<D> {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    fn random_secret(&self) -> Word {
        self.secret_source.random_secret()
    }
}

/// Runtime choice between the dictionary policies
///
/// Keeps static dispatch while letting the CLI pick a policy.
#[derive(Debug, Clone)]
pub enum DictionaryKind {
    /// Only curated words may be guessed
    Curated(WordList),
    /// Any five letters may be guessed
    Open(OpenDictionary<WordList>),
    /// Words from an external allow-list may be guessed
    AllowList(AllowListDictionary<WordList>),
}

impl Dictionary for DictionaryKind {
    fn is_valid_word(&self, word: &Word) -> bool {
        match self {
            Self::Curated(d) => d.is_valid_word(word),
            Self::Open(d) => d.is_valid_word(word),
            Self::AllowList(d) => d.is_valid_word(word),
        }
    }

    fn random_secret(&self) -> Word {
        match self {
            Self::Curated(d) => d.random_secret(),
            Self::Open(d) => d.random_secret(),
            Self::AllowList(d) => d.random_secret(),
        }
    }
}

impl DictionaryKind {
    /// Short policy name for status displays
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Curated(_) => "curated",
            Self::Open(_) => "open",
            Self::AllowList(_) => "allow-list",
        }
    }
}

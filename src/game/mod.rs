//! Game state machine
//!
//! A `Game` owns the secret, the guess history, the keyboard aggregate, and the
//! status. Every submission is checked in full before anything is mutated.

pub mod dictionary;
pub mod stats;

pub use dictionary::{
    AllowListDictionary, Dictionary, DictionaryError, DictionaryKind, OpenDictionary, WordList,
};
pub use stats::Statistics;

use crate::core::{FeedbackRow, KeyboardAggregate, MAX_TURNS, Word, WordError, evaluate};
use crate::solver::{Constraints, HardModeViolation, HintEngine, validate};
use std::fmt;
use thiserror::Error;

/// Game status; `Won` and `Lost` are terminal until `reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Why a guess was not accepted
///
/// No variant leaves any trace in the game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Game is already {0}; start a new game")]
    NotInProgress(GameStatus),
    #[error(transparent)]
    InvalidFormat(#[from] WordError),
    #[error("Not in word list: {}", .0.to_uppercase())]
    NotInDictionary(String),
    #[error("Hard mode: {0}")]
    HardMode(#[from] HardModeViolation),
}

/// Signal delivered to subscribers after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GuessAccepted {
        turn: usize,
        row: FeedbackRow,
        status: GameStatus,
    },
    Reset,
}

/// State exchanged with a persistence layer
///
/// `status` is informational; restoring replays `guesses` and trusts the
/// replayed status instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub status: GameStatus,
}

type Listener = Box<dyn FnMut(&GameEvent)>;

/// One game instance
pub struct Game<'a, D: Dictionary> {
    dictionary: D,
    corpus: &'a [Word],
    secret: Word,
    history: Vec<(Word, FeedbackRow)>,
    keyboard: KeyboardAggregate,
    status: GameStatus,
    hard_mode: bool,
    listeners: Vec<Listener>,
}

impl<'a, D: Dictionary> Game<'a, D> {
    /// Start a game with a secret drawn from `dictionary`
    ///
    /// `corpus` is the word set hints are drawn from.
    pub fn new(dictionary: D, corpus: &'a [Word]) -> Self {
        let secret = dictionary.random_secret();
        Self::with_secret(dictionary, corpus, secret)
    }

    /// Start a game with a fixed secret
    pub fn with_secret(dictionary: D, corpus: &'a [Word], secret: Word) -> Self {
        Self {
            dictionary,
            corpus,
            secret,
            history: Vec::new(),
            keyboard: KeyboardAggregate::new(),
            status: GameStatus::InProgress,
            hard_mode: false,
            listeners: Vec::new(),
        }
    }

    /// Rebuild a game by replaying saved guesses against the saved secret
    ///
    /// # Errors
    /// Returns the first `GuessError` hit while replaying, e.g. when a saved
    /// guess is no longer accepted by `dictionary`.
    pub fn restore(
        dictionary: D,
        corpus: &'a [Word],
        saved: &SavedGame,
    ) -> Result<Self, GuessError> {
        let mut game = Self::with_secret(dictionary, corpus, saved.secret.clone());
        for guess in &saved.guesses {
            game.submit_guess(guess.text())?;
        }
        Ok(game)
    }

    /// Snapshot for a persistence layer
    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            secret: self.secret.clone(),
            guesses: self.history.iter().map(|(guess, _)| guess.clone()).collect(),
            status: self.status,
        }
    }

    /// Submit a raw guess
    ///
    /// Checks run in order: game still in progress, format, dictionary
    /// membership, then hard mode (when enabled). Only a guess that passes all
    /// of them is evaluated and recorded.
    ///
    /// # Errors
    /// Returns a `GuessError` describing the first failed check.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::NotInProgress(self.status));
        }

        let guess = Word::new(raw)?;

        if !self.dictionary.is_valid_word(&guess) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        if self.hard_mode {
            validate(&guess, &self.constraints())?;
        }

        let row = evaluate(&guess, &self.secret);
        self.keyboard.record(&guess, &row);

        self.status = if guess == self.secret {
            GameStatus::Won
        } else if self.history.len() + 1 >= MAX_TURNS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        self.history.push((guess, row));

        self.notify(&GameEvent::GuessAccepted {
            turn: self.history.len(),
            row,
            status: self.status,
        });
        Ok(row)
    }

    /// Start over with a fixed secret, or a fresh one from the dictionary
    ///
    /// Hard mode and subscribers carry over.
    pub fn reset(&mut self, secret: Option<Word>) {
        self.secret = secret.unwrap_or_else(|| self.dictionary.random_secret());
        self.history.clear();
        self.keyboard.clear();
        self.status = GameStatus::InProgress;
        self.notify(&GameEvent::Reset);
    }

    pub fn set_hard_mode(&mut self, enabled: bool) {
        self.hard_mode = enabled;
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackRow)] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardAggregate {
        &self.keyboard
    }

    /// The secret; meant for reveal after a loss and for tests
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Constraints implied by the history so far
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::derive(&self.history)
    }

    /// Up to `k` hint words; never mutates the game
    #[must_use]
    pub fn suggest_hints(&self, k: usize) -> Vec<&'a Word> {
        HintEngine::new(self.corpus).suggest(&self.history, k)
    }

    /// Corpus words still consistent with the history
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        HintEngine::new(self.corpus).count_candidates(&self.history)
    }

    /// Register a callback run after every successful submit or reset
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: &GameEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl<D: Dictionary + fmt::Debug> fmt::Debug for Game<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("dictionary", &self.dictionary)
            .field("turn", &self.history.len())
            .field("status", &self.status)
            .field("hard_mode", &self.hard_mode)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

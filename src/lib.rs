//! Hardword
//!
//! A five-letter word guessing game with an optional hard mode, pluggable
//! dictionaries, and frequency-based hints.
//!
//! # Quick Start
//!
//! ```rust
//! use hardword::core::{Word, evaluate};
//! use hardword::game::{Game, WordList};
//! use hardword::wordlists::{WORDS, loader::words_from_slice};
//!
//! // Score a guess directly
//! let row = evaluate(&Word::new("react").unwrap(), &Word::new("crane").unwrap());
//! assert_eq!(row.to_string(), "YYGY-");
//!
//! // Or play a full game
//! let corpus = words_from_slice(WORDS);
//! let dictionary = WordList::new(corpus.clone()).unwrap();
//! let mut game = Game::with_secret(dictionary, &corpus, Word::new("crane").unwrap());
//! let row = game.submit_guess("slate").unwrap();
//! println!("{}", row.to_emoji());
//! ```

// Core domain types
pub mod core;

// Constraints, hard mode, and hints
pub mod solver;

// Game state machine and dictionaries
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

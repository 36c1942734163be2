//! Constraint reasoning over a guess history
//!
//! Derives constraints from feedback, validates hard-mode guesses against
//! them, and ranks the remaining candidates for hints.

pub mod constraints;
pub mod hard_mode;
pub mod hints;

pub use constraints::{Constraints, LetterSet};
pub use hard_mode::{HardModeViolation, validate};
pub use hints::{DEFAULT_HINT_COUNT, HintEngine, letter_presence, score_candidates};

//! Hard-mode guess validation
//!
//! A guess must keep every revealed green in place and contain each letter at
//! least as many times as the history has proven. Yellow letters may be played
//! again in the position where they were yellow; only greens and minimum counts
//! are enforced.

use super::constraints::Constraints;
use crate::core::Word;
use thiserror::Error;

/// Why a guess was rejected under hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// `position` is 0-based; the message reports it 1-based
    #[error("Letter {} must be {}", .position + 1, .required.to_ascii_uppercase() as char)]
    PositionMismatch { position: usize, required: u8 },

    #[error("Guess must contain {} at least {required} time(s)", .letter.to_ascii_uppercase() as char)]
    MissingLetter { letter: u8, required: u8 },
}

/// Check `guess` against the constraints of the current history
///
/// Positions are checked first, left to right, then letters in alphabetical
/// order; the first failure is returned.
///
/// # Errors
/// Returns the first `HardModeViolation` found.
pub fn validate(guess: &Word, constraints: &Constraints) -> Result<(), HardModeViolation> {
    for (position, required) in constraints.required_positions() {
        if guess.char_at(position) != required {
            return Err(HardModeViolation::PositionMismatch { position, required });
        }
    }

    for (letter, required) in constraints.required_letters() {
        if guess.count_of(letter) < required {
            return Err(HardModeViolation::MissingLetter { letter, required });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackRow, evaluate};

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

    fn check(secret: &str, played: &[&str], next: &str) -> Result<(), HardModeViolation> {
        let c = Constraints::derive(&history(secret, played));
        validate(&Word::new(next).unwrap(), &c)
    }

    #[test]
    fn anything_goes_on_first_turn() {
        assert_eq!(check("stare", &[], "zzzzz"), Ok(()));
    }

    #[test]
    fn green_must_stay_in_place() {
        // SLATE vs STARE: S, A, E green; T yellow
        assert_eq!(
            check("stare", &["slate"], "sored"),
            Err(HardModeViolation::PositionMismatch {
                position: 2,
                required: b'a'
            })
        );
    }

    #[test]
    fn first_position_mismatch_is_reported() {
        assert_eq!(
            check("stare", &["slate"], "crate"),
            Err(HardModeViolation::PositionMismatch {
                position: 0,
                required: b's'
            })
        );
    }

    #[test]
    fn yellow_letter_must_be_reused() {
        assert_eq!(
            check("stare", &["slate"], "shake"),
            Err(HardModeViolation::MissingLetter {
                letter: b't',
                required: 1
            })
        );
    }

    #[test]
    fn keeping_greens_and_yellows_is_accepted() {
        assert_eq!(check("stare", &["slate"], "state"), Ok(()));
        assert_eq!(check("stare", &["slate"], "stare"), Ok(()));
    }

    #[test]
    fn yellow_may_return_to_its_old_position() {
        // T was yellow at position 4 (1-based) and may be played there again
        assert_eq!(check("stare", &["slate"], "spate"), Ok(()));
    }

    #[test]
    fn duplicate_minimum_enforced() {
        // LEVEL vs HELLO proves two Ls
        assert_eq!(
            check("hello", &["level"], "helps"),
            Err(HardModeViolation::MissingLetter {
                letter: b'l',
                required: 2
            })
        );
        assert_eq!(check("hello", &["level"], "hella"), Ok(()));
    }

    #[test]
    fn absent_letters_are_not_enforced() {
        // L is known absent, but only greens and minimums are checked
        assert_eq!(check("stare", &["slate"], "slate"), Ok(()));
    }

    #[test]
    fn violation_messages() {
        let pos = HardModeViolation::PositionMismatch {
            position: 2,
            required: b'a',
        };
        assert_eq!(pos.to_string(), "Letter 3 must be A");

        let missing = HardModeViolation::MissingLetter {
            letter: b't',
            required: 1,
        };
        assert_eq!(missing.to_string(), "Guess must contain T at least 1 time(s)");
    }
}

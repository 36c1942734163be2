//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, KeyboardAggregate, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Color one letter as a tile
#[must_use]
pub fn tile(letter: u8, outcome: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {} ", (letter as char).to_ascii_uppercase());
    match outcome {
        Some(LetterFeedback::Correct) => text.black().bold().on_green(),
        Some(LetterFeedback::Present) => text.black().bold().on_yellow(),
        Some(LetterFeedback::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_tiles(guess: &Word, row: &FeedbackRow) -> String {
    guess
        .chars()
        .iter()
        .zip(row.cells())
        .map(|(&letter, &outcome)| tile(letter, Some(outcome)).to_string())
        .collect()
}

/// Render the keyboard aggregate as three indented rows
#[must_use]
pub fn keyboard_lines(keys: &KeyboardAggregate) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let tiles: String = row
                .bytes()
                .map(|letter| tile(letter, keys.get(letter)).to_string())
                .collect();
            format!("{}{tiles}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn tiles_contain_uppercase_letters() {
        colored::control::set_override(false);
        let guess = Word::new("react").unwrap();
        let row = evaluate(&guess, &Word::new("crane").unwrap());
        assert_eq!(colored_tiles(&guess, &row), " R  E  A  C  T ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardAggregate::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[2].starts_with("     Z "));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}

//! Check command
//!
//! Evaluates one guess against a known secret.

use crate::core::{FeedbackRow, Word, evaluate};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub row: FeedbackRow,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, secret: &str) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let row = evaluate(&guess, &secret);

    Ok(CheckResult { guess, secret, row })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_row() {
        let result = check_guess("REACT", "crane").unwrap();
        assert_eq!(result.row.to_string(), "YYGY-");
        assert_eq!(result.guess.text(), "react");
    }

    #[test]
    fn check_rejects_bad_words() {
        assert!(check_guess("reac", "crane").unwrap_err().starts_with("Invalid guess"));
        assert!(check_guess("react", "cr4ne").unwrap_err().starts_with("Invalid secret"));
    }
}

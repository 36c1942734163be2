//! Hint command
//!
//! Suggests next guesses for a history given on the command line, either as
//! `word=feedback` pairs or as plain guesses scored against a known secret.

use crate::core::{FeedbackRow, Word, evaluate};
use crate::solver::HintEngine;

/// Configuration for a hint query
pub struct HintConfig {
    pub entries: Vec<String>,
    pub secret: Option<String>,
    pub count: usize,
}

/// Result of a hint query
pub struct HintResult {
    pub history: Vec<(Word, FeedbackRow)>,
    pub candidates_remaining: usize,
    pub suggestions: Vec<Word>,
}

/// Parse one history entry
///
/// Accepts `crane=GY-GY`, `crane:GY-GY`, or a bare `crane` when a secret is known.
///
/// # Errors
///
/// Returns an error if the word or feedback is malformed, or if a bare word is
/// given without a secret.
pub fn parse_entry(entry: &str, secret: Option<&Word>) -> Result<(Word, FeedbackRow), String> {
    let (word, feedback) = match entry.split_once(['=', ':']) {
        Some((word, feedback)) => (word, Some(feedback)),
        None => (entry, None),
    };

    let guess = Word::new(word.trim()).map_err(|e| format!("Invalid guess '{word}': {e}"))?;

    let row = match (feedback, secret) {
        (Some(text), _) => FeedbackRow::from_str(text.trim())
            .ok_or_else(|| format!("Invalid feedback '{text}' (use G/Y/- or 🟩🟨⬜)"))?,
        (None, Some(secret)) => evaluate(&guess, secret),
        (None, None) => {
            return Err(format!(
                "No feedback for '{word}': write {word}=GY-GY or pass --secret"
            ));
        }
    };

    Ok((guess, row))
}

/// Run a hint query against `corpus`
///
/// # Errors
///
/// Returns an error if the secret or any entry is malformed.
pub fn suggest_hints(config: &HintConfig, corpus: &[Word]) -> Result<HintResult, String> {
    let secret = config
        .secret
        .as_deref()
        .map(|s| Word::new(s).map_err(|e| format!("Invalid secret: {e}")))
        .transpose()?;

    let history = config
        .entries
        .iter()
        .map(|entry| parse_entry(entry, secret.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let engine = HintEngine::new(corpus);
    let suggestions = engine
        .suggest(&history, config.count)
        .into_iter()
        .cloned()
        .collect();

    Ok(HintResult {
        candidates_remaining: engine.count_candidates(&history),
        history,
        suggestions,
    })
}

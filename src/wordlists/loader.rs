//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// System word list tried when an allow-list file is missing
pub const SYSTEM_WORDS: &str = "/usr/share/dict/words";

/// Error type for allow-list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No allow-list found at {} or {}", .0.display(), SYSTEM_WORDS)]
    NotFound(PathBuf),
    #[error("Allow-list {} contains no five-letter words", .0.display())]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Returns the valid five-letter words in file order, skipping blank lines,
/// malformed entries, and duplicates.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hardword::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(content.lines()))
}

/// Load an allow-list, falling back to the system word list
///
/// # Errors
///
/// Returns `LoadError::NotFound` if neither file can be read, or
/// `LoadError::Empty` if the file that was read has no usable words.
pub fn load_allow_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let (source, words) = match load_from_file(path) {
        Ok(words) => (path, words),
        Err(_) => {
            let system = Path::new(SYSTEM_WORDS);
            let words =
                load_from_file(system).map_err(|_| LoadError::NotFound(path.to_path_buf()))?;
            (system, words)
        }
    };

    if words.is_empty() {
        return Err(LoadError::Empty(source.to_path_buf()));
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hardword::wordlists::loader::words_from_slice;
/// use hardword::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_words(slice.iter().copied())
}

fn parse_words<'s>(lines: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .filter_map(|line| Word::new(line.trim()).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hardword-{}-{name}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid_and_duplicates() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate", "CRANE", "cr4ne"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_trims_lines() {
        let path = temp_file("trim.txt", "  crane \n\nslate\nnot-a-word\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn load_allow_list_rejects_file_without_words() {
        let path = temp_file("empty.txt", "a\nbb\ntoolong\n");
        let result = load_allow_list(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Empty(_))));
    }

    #[test]
    fn missing_allow_list_falls_back_or_reports_path() {
        let path = std::env::temp_dir()
            .join(format!("hardword-{}-missing.txt", std::process::id()));
        match load_allow_list(&path) {
            // host has a system word list
            Ok(words) => assert!(!words.is_empty()),
            Err(LoadError::Empty(source)) => assert_eq!(source, Path::new(SYSTEM_WORDS)),
            Err(LoadError::NotFound(reported)) => {
                assert_eq!(reported, path);
                assert!(!Path::new(SYSTEM_WORDS).exists());
            }
        }
    }

    #[test]
    fn not_found_message_names_both_paths() {
        let err = LoadError::NotFound(PathBuf::from("/nowhere/words.txt"));
        let message = err.to_string();
        assert!(message.contains("/nowhere/words.txt"));
        assert!(message.contains(SYSTEM_WORDS));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
    }
}

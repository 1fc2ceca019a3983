//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from embedded constants.

use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("unable to read word file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word file {} contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Load a newline-delimited dictionary from a file
///
/// Blank lines are ignored. The first valid word fixes the word length; invalid
/// words and words of any other length are skipped with a warning.
///
/// # Errors
///
/// Returns `DictionaryError::Unreadable` if the file cannot be read, and
/// `DictionaryError::Empty` if no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(content.lines());
    if words.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// Applies the same skipping rules as [`load_from_file`].
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
/// use wordle_guesser::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut word_len: Option<usize> = None;
    let mut words = Vec::new();

    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = match Word::new(trimmed) {
            Ok(word) => word,
            Err(e) => {
                warn!("skipping line {}: {trimmed:?}: {e}", index + 1);
                continue;
            }
        };

        let expected = *word_len.get_or_insert(word.len());
        if word.len() != expected {
            warn!(
                "skipping line {}: {trimmed:?} has {} letters, expected {expected}",
                index + 1,
                word.len()
            );
            continue;
        }

        words.push(word);
    }

    words
}

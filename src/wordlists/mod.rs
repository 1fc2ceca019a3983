//! Dictionaries for the solver
//!
//! Loads newline-delimited word files and provides a bundled default list.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, load_from_file, words_from_slice};

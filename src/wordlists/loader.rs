//! Word list loading utilities
//!
//! Supplies raw lines from a file or the embedded list. Normalization,
//! length filtering, and deduplication are the lexicon's job, not the
//! loader's.

use crate::core::Lexicon;
use std::fs;
use std::io;
use std::path::Path;

/// Read the raw lines of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::core::Lexicon;
/// use wordle_assistant::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/words.txt").unwrap();
/// let lexicon = Lexicon::from_lines(lines);
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::{WORDS, loader::lexicon_from_slice};
///
/// let lexicon = lexicon_from_slice(WORDS);
/// assert_eq!(lexicon.len(), WORDS.len());
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    Lexicon::from_lines(slice.iter().copied())
}

//! Letter-frequency scoring
//!
//! Ranks opening guesses by how common their letters are across the lexicon:
//! each letter gets its occurrence probability, and a word scores the product
//! of its letters' probabilities (repeats multiply the same probability in
//! again).

use crate::core::{Lexicon, Word};
use std::cmp::Ordering;
use std::fmt;

const ALPHABET: usize = 26;

/// Per-letter occurrence probabilities over a lexicon
///
/// Probabilities are occurrence counts over the lexicon's concatenated
/// letters divided by the total letter count; letters absent from the
/// lexicon map to zero, and the present ones sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    probabilities: [f64; ALPHABET],
}

/// Error type for building a model over zero words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLexiconError;

impl fmt::Display for EmptyLexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot build a letter-frequency model over an empty lexicon")
    }
}

impl std::error::Error for EmptyLexiconError {}

impl FrequencyModel {
    /// Build the model from a lexicon
    ///
    /// # Errors
    /// Returns `EmptyLexiconError` if the lexicon holds no words.
    pub fn build(lexicon: &Lexicon) -> Result<Self, EmptyLexiconError> {
        if lexicon.is_empty() {
            return Err(EmptyLexiconError);
        }

        let mut counts = [0usize; ALPHABET];
        let mut total = 0usize;
        for word in lexicon.words() {
            for &letter in word.chars() {
                counts[usize::from(letter - b'a')] += 1;
                total += 1;
            }
        }

        let probabilities = counts.map(|count| count as f64 / total as f64);
        Ok(Self { probabilities })
    }

    /// Occurrence probability of a single letter
    ///
    /// # Panics
    /// Panics if `letter` is not a lowercase ASCII letter.
    #[inline]
    #[must_use]
    pub fn probability(&self, letter: u8) -> f64 {
        assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        self.probabilities[usize::from(letter - b'a')]
    }

    /// Score a word as the product of its letters' probabilities
    ///
    /// Repeated letters contribute their probability once per occurrence.
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.chars()
            .iter()
            .map(|&letter| self.probability(letter))
            .product()
    }

    /// Rank words by score, best first, keeping at most `top_k`
    ///
    /// The sort is stable: equal scores keep their original order, so the
    /// ranking is deterministic for a given input order.
    #[must_use]
    pub fn rank<'a>(&self, words: &'a [Word], top_k: usize) -> Vec<&'a Word> {
        let mut scored: Vec<(f64, &Word)> =
            words.iter().map(|word| (self.score(word), word)).collect();

        scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);
        scored.into_iter().map(|(_, word)| word).collect()
    }
}

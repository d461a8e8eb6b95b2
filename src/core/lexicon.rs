//! The working set of legal candidate words
//!
//! A Lexicon normalizes, length-filters, and deduplicates the raw strings a
//! word list collaborator supplies. Insertion order of first occurrences is
//! preserved; ranking uses it as the tie-break.

use super::Word;
use rustc_hash::FxHashSet;

/// An immutable, deduplicated collection of fixed-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw lines
    ///
    /// Entries that are not valid words after lowercasing (wrong length,
    /// non-alphabetic) are skipped, as are duplicates of an earlier entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_lines(["CRANE", "crane", "slate", "xx", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words = Vec::new();

        for line in lines {
            let Ok(word) = Word::new(line.as_ref().trim()) else {
                continue;
            };
            if seen.insert(word.text().to_string()) {
                words.push(word);
            }
        }

        Self { words }
    }

    /// Build a lexicon from words that are already validated
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        Self { words }
    }

    /// All words, in first-occurrence order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the lexicon
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the lexicon holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is a member
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Words with all-distinct letters, in lexicon order
    ///
    /// Optional pre-filter for opening-guess ranking; the full candidate set
    /// always keeps repeated-letter words.
    #[must_use]
    pub fn distinct_letter_words(&self) -> Vec<Word> {
        self.words
            .iter()
            .filter(|w| !w.has_repeated_letter())
            .cloned()
            .collect()
    }
}

//! Feedback rules and candidate filtering
//!
//! Each position of a guess yields one [`Rule`]. A whole guess's rules are
//! applied as a single batch against one [`MatchedCounts`] snapshot; the
//! snapshot is what makes duplicate-letter feedback filter correctly, since
//! an `Excluded` for one occurrence of a letter must see the confirmed count
//! contributed by the `Match`/`ContainsElsewhere` rules of the same guess.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-letter tally of occurrences confirmed within one guess
///
/// Scoped to a single feedback interpretation; lookups default to zero for
/// letters that were never confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedCounts {
    counts: FxHashMap<u8, usize>,
}

impl MatchedCounts {
    /// Empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmed occurrences of a letter (zero if never confirmed)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Record one more confirmed occurrence of a letter
    pub fn increment(&mut self, letter: u8) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }
}

/// One position's feedback classification
///
/// A tagged sum over the three Wordle outcomes, each carrying the guessed
/// letter and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The letter sits at exactly this position in the target
    Match { letter: u8, position: usize },
    /// The letter is in the target, but not at this position
    ContainsElsewhere { letter: u8, position: usize },
    /// This occurrence of the letter is not in the target
    Excluded { letter: u8, position: usize },
}

impl Rule {
    /// Decide whether a candidate survives this rule
    ///
    /// `matched` is the whole-guess snapshot of confirmed letter counts.
    #[must_use]
    pub fn keeps(&self, word: &Word, matched: &MatchedCounts) -> bool {
        match *self {
            Self::Match { letter, position } => word.char_at(position) == letter,
            Self::ContainsElsewhere { letter, position } => {
                word.contains(letter)
                    && word.char_at(position) != letter
                    && word.count_of(letter) >= matched.count(letter)
            }
            Self::Excluded { letter, .. } => {
                let confirmed = matched.count(letter);
                if confirmed == 0 {
                    // Letter was never confirmed anywhere in this guess, so
                    // any occurrence disqualifies the candidate.
                    !word.contains(letter)
                } else {
                    // Feedback confirmed exactly `confirmed` occurrences;
                    // candidates with fewer cannot be the target.
                    confirmed <= word.count_of(letter)
                }
            }
        }
    }

    /// The guessed letter this rule constrains
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match *self {
            Self::Match { letter, .. }
            | Self::ContainsElsewhere { letter, .. }
            | Self::Excluded { letter, .. } => letter,
        }
    }

    /// The guess position this rule was derived from
    #[must_use]
    pub const fn position(&self) -> usize {
        match *self {
            Self::Match { position, .. }
            | Self::ContainsElsewhere { position, .. }
            | Self::Excluded { position, .. } => position,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter());
        match self {
            Self::Match { position, .. } => write!(f, "'{letter}' at {position}"),
            Self::ContainsElsewhere { position, .. } => {
                write!(f, "'{letter}' present, not at {position}")
            }
            Self::Excluded { position, .. } => write!(f, "'{letter}' absent (from {position})"),
        }
    }
}

/// Filter candidates through a whole guess's rule batch
///
/// Keeps the words that satisfy every rule against the shared `matched`
/// snapshot. Pure; applying the same batch twice yields the same set.
#[must_use]
pub fn filter_candidates(candidates: &[Word], rules: &[Rule], matched: &MatchedCounts) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| rules.iter().all(|rule| rule.keeps(word, matched)))
        .cloned()
        .collect()
}

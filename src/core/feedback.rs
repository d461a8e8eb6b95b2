//! Feedback interpretation
//!
//! Turns one guess's feedback into its per-position [`Rule`]s plus the
//! [`MatchedCounts`] snapshot the rules are filtered against. Feedback comes
//! from one of two places: computed against a known target (self-play), or
//! supplied externally as a symbol string when the target is unknown.
//!
//! Symbol alphabet, one symbol per position:
//! - `G` - letter in the correct position
//! - `Y` - letter present, wrong position
//! - `-` - letter absent
//!
//! Lowercase, `_`, and the emoji tiles 🟩/🟨/⬜ are accepted as aliases and
//! canonicalized.

use super::rule::{MatchedCounts, Rule};
use super::{WORD_LEN, Word};
use std::fmt;

/// Interpreted feedback for one guess
///
/// Holds the ordered per-position rules, the whole-guess matched-letter
/// snapshot, and the canonical symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    rules: Vec<Rule>,
    matched: MatchedCounts,
    code: String,
}

/// Error type for malformed external feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { expected: usize, got: usize },
    UnknownSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "Feedback must be exactly {expected} symbols, got {got}")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Unrecognized feedback symbol '{symbol}' (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Interpret a guess against a known target
    ///
    /// Two passes, matching the game's own rules for duplicate letters:
    /// exact position hits first, each consuming its target occurrence, then
    /// the remaining positions are tested against the unconsumed target
    /// letters. A position resolves to `ContainsElsewhere` only while an
    /// unconsumed occurrence is left; otherwise it is `Excluded`, even when
    /// the same letter matched elsewhere in the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("level").unwrap();
    /// let target = Word::new("alley").unwrap();
    /// let feedback = Feedback::assess(&guess, &target);
    /// assert_eq!(feedback.code(), "Y--GY");
    /// ```
    #[must_use]
    pub fn assess(guess: &Word, target: &Word) -> Self {
        let mut remaining: [Option<u8>; WORD_LEN] = target.chars().map(Some);
        let mut slots: [Option<Rule>; WORD_LEN] = [None; WORD_LEN];
        let mut matched = MatchedCounts::new();

        // First pass: exact position hits consume their target occurrence
        for position in 0..WORD_LEN {
            let letter = guess.char_at(position);
            if target.char_at(position) == letter {
                slots[position] = Some(Rule::Match { letter, position });
                remaining[position] = None;
                matched.increment(letter);
            }
        }

        // Second pass: resolve the rest against unconsumed target letters
        for position in 0..WORD_LEN {
            if slots[position].is_some() {
                continue;
            }
            let letter = guess.char_at(position);
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                *slot = None;
                slots[position] = Some(Rule::ContainsElsewhere { letter, position });
                matched.increment(letter);
            } else {
                slots[position] = Some(Rule::Excluded { letter, position });
            }
        }

        let rules: Vec<Rule> = slots
            .into_iter()
            .map(|slot| slot.expect("every position resolved"))
            .collect();
        let code = code_of(&rules);

        Self {
            rules,
            matched,
            code,
        }
    }

    /// Interpret an externally supplied symbol string for a guess
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly [`WORD_LEN`]
    /// symbols or contains a symbol outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::parse("gy--🟩", &guess).unwrap();
    /// assert_eq!(feedback.code(), "GY--G");
    /// ```
    pub fn parse(code: &str, guess: &Word) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = code.chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(FeedbackError::LengthMismatch {
                expected: WORD_LEN,
                got: symbols.len(),
            });
        }

        let mut rules = Vec::with_capacity(WORD_LEN);
        let mut matched = MatchedCounts::new();

        for (position, symbol) in symbols.into_iter().enumerate() {
            let letter = guess.char_at(position);
            let rule = match symbol {
                'G' | 'g' | '🟩' => {
                    matched.increment(letter);
                    Rule::Match { letter, position }
                }
                'Y' | 'y' | '🟨' => {
                    matched.increment(letter);
                    Rule::ContainsElsewhere { letter, position }
                }
                '-' | '_' | '⬜' => Rule::Excluded { letter, position },
                other => return Err(FeedbackError::UnknownSymbol(other)),
            };
            rules.push(rule);
        }

        let code = code_of(&rules);
        Ok(Self {
            rules,
            matched,
            code,
        })
    }

    /// The ordered per-position rules
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The whole-guess matched-letter snapshot
    #[inline]
    #[must_use]
    pub const fn matched(&self) -> &MatchedCounts {
        &self.matched
    }

    /// The canonical symbol string (`G`/`Y`/`-`)
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Check whether every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.rules
            .iter()
            .all(|rule| matches!(rule, Rule::Match { .. }))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

fn code_of(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|rule| match rule {
            Rule::Match { .. } => 'G',
            Rule::ContainsElsewhere { .. } => 'Y',
            Rule::Excluded { .. } => '-',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn assess_all_absent() {
        let feedback = Feedback::assess(&word("abcde"), &word("fghij"));
        assert_eq!(feedback.code(), "-----");
        assert_eq!(feedback.matched().count(b'a'), 0);
    }

    #[test]
    fn assess_perfect_match() {
        let feedback = Feedback::assess(&word("crane"), &word("crane"));
        assert_eq!(feedback.code(), "GGGGG");
        assert!(feedback.is_win());
    }

    #[test]
    fn assess_classic_example() {
        // CRANE vs SLATE: A and E exact, the rest absent
        let feedback = Feedback::assess(&word("crane"), &word("slate"));
        assert_eq!(feedback.code(), "--G-G");
        assert!(!feedback.is_win());
    }

    #[test]
    fn assess_duplicate_guess_letters() {
        // SPEED vs ERASE: S misplaced, both E's misplaced, P and D absent
        let feedback = Feedback::assess(&word("speed"), &word("erase"));
        assert_eq!(feedback.code(), "Y-YY-");
        assert_eq!(feedback.matched().count(b'e'), 2);
        assert_eq!(feedback.matched().count(b's'), 1);
        assert_eq!(feedback.matched().count(b'p'), 0);
    }

    #[test]
    fn assess_exact_hit_consumes_before_misplaced() {
        // ROBOT vs FLOOR: the second O is an exact hit and consumes first;
        // the first O still finds the other remaining O
        let feedback = Feedback::assess(&word("robot"), &word("floor"));
        assert_eq!(feedback.code(), "YY-G-");
        assert_eq!(feedback.matched().count(b'o'), 2);
        assert_eq!(feedback.matched().count(b'r'), 1);
    }

    #[test]
    fn assess_guess_has_more_copies_than_target() {
        // LEVEL vs ALLEY: target's single E is taken by the exact hit at
        // position 3, so the guess's earlier E is excluded; both guess L's
        // find target occurrences
        let feedback = Feedback::assess(&word("level"), &word("alley"));
        assert_eq!(feedback.code(), "Y--GY");
        assert_eq!(feedback.matched().count(b'l'), 2);
        assert_eq!(feedback.matched().count(b'e'), 1);
        assert_eq!(feedback.matched().count(b'v'), 0);

        assert_eq!(
            feedback.rules()[0],
            Rule::ContainsElsewhere {
                letter: b'l',
                position: 0
            }
        );
        assert_eq!(
            feedback.rules()[1],
            Rule::Excluded {
                letter: b'e',
                position: 1
            }
        );
        assert_eq!(
            feedback.rules()[3],
            Rule::Match {
                letter: b'e',
                position: 3
            }
        );
    }

    #[test]
    fn parse_canonical_symbols() {
        let guess = word("crane");
        let feedback = Feedback::parse("GY--G", &guess).unwrap();

        assert_eq!(feedback.code(), "GY--G");
        assert_eq!(feedback.matched().count(b'c'), 1);
        assert_eq!(feedback.matched().count(b'r'), 1);
        assert_eq!(feedback.matched().count(b'a'), 0);
        assert_eq!(feedback.matched().count(b'e'), 1);
    }

    #[test]
    fn parse_accepts_aliases() {
        let guess = word("crane");
        let canonical = Feedback::parse("GY--G", &guess).unwrap();

        assert_eq!(Feedback::parse("gy__g", &guess).unwrap(), canonical);
        assert_eq!(Feedback::parse("🟩🟨⬜⬜🟩", &guess).unwrap(), canonical);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let guess = word("crane");
        assert_eq!(
            Feedback::parse("GY--", &guess),
            Err(FeedbackError::LengthMismatch {
                expected: 5,
                got: 4
            })
        );
        assert!(matches!(
            Feedback::parse("GY--GG", &guess),
            Err(FeedbackError::LengthMismatch { got: 6, .. })
        ));
        assert!(matches!(
            Feedback::parse("", &guess),
            Err(FeedbackError::LengthMismatch { got: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        let guess = word("crane");
        assert_eq!(
            Feedback::parse("GX--G", &guess),
            Err(FeedbackError::UnknownSymbol('X'))
        );
    }

    #[test]
    fn parse_win_code() {
        let guess = word("crane");
        let feedback = Feedback::parse("GGGGG", &guess).unwrap();
        assert!(feedback.is_win());
    }

    #[test]
    fn assess_and_parse_agree() {
        let guess = word("speed");
        let target = word("erase");

        let assessed = Feedback::assess(&guess, &target);
        let parsed = Feedback::parse(assessed.code(), &guess).unwrap();

        assert_eq!(assessed, parsed);
    }
}

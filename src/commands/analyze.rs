//! Frequency analysis command
//!
//! Shows the letter-frequency model behind the opening guess: per-letter
//! probabilities, the top-ranked openers, and optionally one word's score
//! and rank.

use crate::core::{Lexicon, Word};
use crate::solver::FrequencyModel;

/// Analysis of one word against the frequency model
pub struct WordAnalysis {
    pub word: String,
    pub score: f64,
    /// 1-based position in the full lexicon ranking
    pub rank: usize,
}

/// Result of a frequency analysis
pub struct AnalysisResult {
    /// Letter probabilities, most frequent first, zero-probability letters
    /// omitted
    pub letter_probabilities: Vec<(char, f64)>,
    /// Top openers with their scores, best first
    pub top_openers: Vec<(String, f64)>,
    pub lexicon_size: usize,
    pub word: Option<WordAnalysis>,
}

/// Analyze the lexicon's letter frequencies and, optionally, one word
///
/// `distinct_only` restricts the opener ranking to words with all-distinct
/// letters, mirroring the opening-guess policy. The optional word is always
/// ranked against the full lexicon.
///
/// # Errors
///
/// Returns an error if the lexicon is empty, or if `word` is given but is
/// invalid or not in the lexicon.
pub fn analyze(
    word: Option<&str>,
    lexicon: &Lexicon,
    top_k: usize,
    distinct_only: bool,
) -> Result<AnalysisResult, String> {
    let model = FrequencyModel::build(lexicon).map_err(|e| e.to_string())?;

    let mut letter_probabilities: Vec<(char, f64)> = (b'a'..=b'z')
        .map(|letter| (char::from(letter), model.probability(letter)))
        .filter(|&(_, p)| p > 0.0)
        .collect();
    letter_probabilities
        .sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let opener_words = if distinct_only {
        lexicon.distinct_letter_words()
    } else {
        lexicon.words().to_vec()
    };
    let top_openers: Vec<(String, f64)> = model
        .rank(&opener_words, top_k)
        .into_iter()
        .map(|w| (w.text().to_string(), model.score(w)))
        .collect();

    let word = match word {
        None => None,
        Some(text) => {
            let word = Word::new(text).map_err(|e| format!("Invalid word: {e}"))?;
            if !lexicon.contains(&word) {
                return Err(format!("Word '{text}' not in word list"));
            }
            let full_ranking = model.rank(lexicon.words(), lexicon.len());
            let rank = full_ranking
                .iter()
                .position(|w| *w == &word)
                .map_or(lexicon.len(), |i| i + 1);
            Some(WordAnalysis {
                word: word.text().to_string(),
                score: model.score(&word),
                rank,
            })
        }
    };

    Ok(AnalysisResult {
        letter_probabilities,
        top_openers,
        lexicon_size: lexicon.len(),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(texts: &[&str]) -> Lexicon {
        Lexicon::from_lines(texts.iter().copied())
    }

    #[test]
    fn analyze_without_word() {
        let lex = lexicon(&["abcde", "aabbe"]);
        let result = analyze(None, &lex, 10, false).unwrap();

        assert!(result.word.is_none());
        assert_eq!(result.lexicon_size, 2);
        // 5 distinct letters across both words
        assert_eq!(result.letter_probabilities.len(), 5);
        // Most frequent first
        assert!(result.letter_probabilities[0].1 >= result.letter_probabilities[1].1);
        assert_eq!(result.top_openers.len(), 2);
        assert_eq!(result.top_openers[0].0, "aabbe");
    }

    #[test]
    fn analyze_with_word_ranks_it() {
        let lex = lexicon(&["abcde", "aabbe"]);
        let result = analyze(Some("abcde"), &lex, 10, false).unwrap();

        let analysis = result.word.unwrap();
        assert_eq!(analysis.word, "abcde");
        assert_eq!(analysis.rank, 2);
        assert!(analysis.score > 0.0);
    }

    #[test]
    fn analyze_distinct_only_filters_openers() {
        let lex = lexicon(&["abcde", "aabbe"]);
        let result = analyze(None, &lex, 10, true).unwrap();

        assert_eq!(result.top_openers.len(), 1);
        assert_eq!(result.top_openers[0].0, "abcde");
    }

    #[test]
    fn analyze_unknown_word_errors() {
        let lex = lexicon(&["abcde", "aabbe"]);
        assert!(analyze(Some("zzzzz"), &lex, 10, false).is_err());
        assert!(analyze(Some("bad"), &lex, 10, false).is_err());
    }

    #[test]
    fn analyze_empty_lexicon_errors() {
        let lex = Lexicon::from_lines(std::iter::empty::<&str>());
        assert!(analyze(None, &lex, 10, false).is_err());
    }
}

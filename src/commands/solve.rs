//! Ground-truth solving command
//!
//! Self-plays a session against a known target word and returns the solution
//! path.

use crate::core::{Feedback, Lexicon, Word};
use crate::solver::{Selection, Session, SessionConfig, SessionState};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Round cap; defaults to the lexicon size, which the session can never
    /// exceed anyway
    pub max_rounds: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub solved: bool,
    pub steps: Vec<GuessStep>,
}

/// A single round in the solution path
pub struct GuessStep {
    pub word: String,
    pub code: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Self-play a session against a known target
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (wrong length or non-alphabetic)
/// - The target is not in the lexicon (soundness is only guaranteed for
///   lexicon members)
/// - The lexicon is empty
pub fn solve_word(
    config: &SolveConfig,
    lexicon: &Lexicon,
    session_config: SessionConfig,
    selection: Selection,
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    if !lexicon.contains(&target) {
        return Err(format!("Target '{target}' not in word list"));
    }

    let mut session =
        Session::new(lexicon, session_config, selection).map_err(|e| e.to_string())?;
    let limit = config.max_rounds.unwrap_or_else(|| lexicon.len());

    let mut steps = Vec::new();
    while session.state() == SessionState::Active && steps.len() < limit {
        let candidates_before = session.candidates().len();
        let guess = session
            .suggest()
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let feedback = Feedback::assess(&guess, &target);
        session
            .apply(&guess, &feedback)
            .map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            word: guess.text().to_string(),
            code: feedback.code().to_string(),
            candidates_before,
            candidates_after: session.candidates().len(),
        });
    }

    let solved = session.solution() == Some(&target);
    Ok(SolveResult {
        target: config.target.clone(),
        solved,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::lexicon_from_slice;

    fn run(target: &str) -> Result<SolveResult, String> {
        let lexicon = lexicon_from_slice(&WORDS[..100]);
        solve_word(
            &SolveConfig::new(target.to_string()),
            &lexicon,
            SessionConfig::default(),
            Selection::deterministic(),
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let lexicon = lexicon_from_slice(&WORDS[..100]);
        let target = lexicon.words()[0].text().to_string();

        let result = run(&target).unwrap();
        assert!(result.solved);
        assert!(result.steps.len() <= lexicon.len());
    }

    #[test]
    fn solve_records_shrinking_counts() {
        let lexicon = lexicon_from_slice(&WORDS[..100]);
        let target = lexicon.words()[40].text().to_string();

        let result = run(&target).unwrap();
        assert!(result.solved);

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        assert!(run("not-a-word").is_err());
        // Valid shape, but not in the list
        assert!(run("zzzzz").is_err());
    }

    #[test]
    fn solve_respects_round_limit() {
        let lexicon = lexicon_from_slice(&WORDS[..100]);
        let mut config = SolveConfig::new(lexicon.words()[50].text().to_string());
        config.max_rounds = Some(2);

        let result = solve_word(
            &config,
            &lexicon,
            SessionConfig::default(),
            Selection::deterministic(),
        )
        .unwrap();

        assert!(result.steps.len() <= 2);
    }

    #[test]
    fn solve_is_reproducible_with_seed() {
        let lexicon = lexicon_from_slice(&WORDS[..100]);
        let config = SolveConfig::new(lexicon.words()[10].text().to_string());

        let first = solve_word(
            &config,
            &lexicon,
            SessionConfig::default(),
            Selection::seeded(7),
        )
        .unwrap();
        let second = solve_word(
            &config,
            &lexicon,
            SessionConfig::default(),
            Selection::seeded(7),
        )
        .unwrap();

        let path = |r: &SolveResult| -> Vec<String> {
            r.steps.iter().map(|s| s.word.clone()).collect()
        };
        assert_eq!(path(&first), path(&second));
    }
}

//! The constraint-solving session
//!
//! A [`Session`] owns a working copy of the lexicon and shrinks it round by
//! round: each guess's feedback becomes a rule batch, the batch filters the
//! candidate set, and the session converges to a single word (solved) or an
//! empty set (contradictory feedback).

use super::frequency::{EmptyLexiconError, FrequencyModel};
use super::selection::Selection;
use crate::core::{Feedback, Lexicon, Word, filter_candidates};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Solved,
    /// No candidate satisfies the accumulated feedback
    Contradiction,
}

impl SessionState {
    /// Check whether the session accepts further rounds
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Contradiction)
    }
}

/// One recorded round: the guess, its feedback code, and the candidate count
/// left afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRound {
    guess: Word,
    code: String,
    remaining: usize,
}

impl GuessRound {
    /// The word that was played
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Canonical feedback code for the round
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Candidates remaining after the round
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Error type for feedback that eliminates every candidate
///
/// Carries the round, guess, and feedback so the caller can explain which
/// input broke the session. Most often an operator mistyped a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContradictionError {
    pub round: usize,
    pub guess: String,
    pub feedback: String,
}

impl fmt::Display for ContradictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {}: feedback '{}' for guess '{}' leaves no candidate - \
             the feedback sequence is inconsistent with the word list",
            self.round, self.feedback, self.guess
        )
    }
}

impl std::error::Error for ContradictionError {}

/// Tunables for a session
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Size of the ranked opening pool the first guess is drawn from
    pub top_k: usize,
    /// Restrict the opening pool to words with all-distinct letters
    pub distinct_opener: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_k: 50,
            distinct_opener: true,
        }
    }
}

/// A single game's solving session
///
/// Owns the evolving candidate set; it is mutated only through
/// [`Session::apply`]. Terminal states are final: start a new session to
/// play another game.
#[derive(Debug, Clone)]
pub struct Session {
    candidates: Vec<Word>,
    opener_pool: Vec<Word>,
    rounds: Vec<GuessRound>,
    state: SessionState,
    selection: Selection,
}

impl Session {
    /// Start a session over a lexicon
    ///
    /// Builds the letter-frequency opening pool up front: the `top_k`
    /// highest-scoring words, optionally restricted to distinct-letter words
    /// (falling back to the whole lexicon when that filter would leave the
    /// pool empty).
    ///
    /// # Errors
    /// Returns `EmptyLexiconError` if the lexicon holds no words.
    pub fn new(
        lexicon: &Lexicon,
        config: SessionConfig,
        selection: Selection,
    ) -> Result<Self, EmptyLexiconError> {
        let model = FrequencyModel::build(lexicon)?;

        let pool_words = if config.distinct_opener {
            let distinct = lexicon.distinct_letter_words();
            if distinct.is_empty() {
                lexicon.words().to_vec()
            } else {
                distinct
            }
        } else {
            lexicon.words().to_vec()
        };
        let opener_pool: Vec<Word> = model
            .rank(&pool_words, config.top_k)
            .into_iter()
            .cloned()
            .collect();

        let candidates = lexicon.words().to_vec();
        let state = if candidates.len() == 1 {
            SessionState::Solved
        } else {
            SessionState::Active
        };

        Ok(Self {
            candidates,
            opener_pool,
            rounds: Vec::new(),
            state,
            selection,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Remaining candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Rounds recorded so far, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[GuessRound] {
        &self.rounds
    }

    /// Number of rounds played
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// The solved word, once the state is [`SessionState::Solved`]
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.state {
            SessionState::Solved => self.candidates.first(),
            _ => None,
        }
    }

    /// Suggest the next guess
    ///
    /// Round one draws from the frequency-ranked opening pool; later rounds
    /// draw from the remaining candidates. Both picks go through the
    /// session's [`Selection`] source. Returns `None` once the session is
    /// terminal.
    pub fn suggest(&mut self) -> Option<Word> {
        if self.state.is_terminal() {
            return None;
        }
        let pool = if self.rounds.is_empty() {
            &self.opener_pool
        } else {
            &self.candidates
        };
        self.selection.choose(pool).cloned()
    }

    /// Apply one round of feedback
    ///
    /// Filters the candidate set with the guess's whole rule batch, records
    /// the round, and re-evaluates the state. Unless the feedback is a win,
    /// the played guess is dropped from the surviving set: non-win feedback
    /// disproves it, and a session must never settle on a disproved word.
    ///
    /// Calls on a terminated session are not processed; the terminal state
    /// is returned unchanged.
    ///
    /// # Errors
    /// Returns `ContradictionError` when the feedback eliminates every
    /// candidate; the session then rests in [`SessionState::Contradiction`].
    pub fn apply(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<SessionState, ContradictionError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let mut filtered = filter_candidates(&self.candidates, feedback.rules(), feedback.matched());
        if !feedback.is_win() {
            filtered.retain(|word| word != guess);
        }
        self.candidates = filtered;

        self.rounds.push(GuessRound {
            guess: guess.clone(),
            code: feedback.code().to_string(),
            remaining: self.candidates.len(),
        });

        self.state = match self.candidates.len() {
            0 => SessionState::Contradiction,
            1 => SessionState::Solved,
            _ => SessionState::Active,
        };

        if self.state == SessionState::Contradiction {
            return Err(ContradictionError {
                round: self.rounds.len(),
                guess: guess.text().to_string(),
                feedback: feedback.code().to_string(),
            });
        }
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(texts: &[&str]) -> Lexicon {
        Lexicon::from_lines(texts.iter().copied())
    }

    fn session(texts: &[&str]) -> Session {
        Session::new(
            &lexicon(texts),
            SessionConfig::default(),
            Selection::deterministic(),
        )
        .unwrap()
    }

    #[test]
    fn new_session_starts_active_with_full_lexicon() {
        let s = session(&["crane", "slate", "irate"]);
        assert_eq!(s.state(), SessionState::Active);
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.rounds_played(), 0);
    }

    #[test]
    fn new_session_rejects_empty_lexicon() {
        let result = Session::new(
            &Lexicon::from_lines(std::iter::empty::<&str>()),
            SessionConfig::default(),
            Selection::deterministic(),
        );
        assert_eq!(result.unwrap_err(), EmptyLexiconError);
    }

    #[test]
    fn single_word_lexicon_is_solved_immediately() {
        let s = session(&["crane"]);
        assert_eq!(s.state(), SessionState::Solved);
        assert_eq!(s.solution().unwrap().text(), "crane");
    }

    #[test]
    fn deterministic_opener_is_top_ranked() {
        // "eerie" would outscore on raw letter frequency but has repeats, so
        // the default distinct-letter pool skips it
        let lex = lexicon(&["vwxyz", "eerie", "aside"]);
        let mut s = Session::new(&lex, SessionConfig::default(), Selection::deterministic())
            .unwrap();

        assert_eq!(s.suggest().unwrap().text(), "aside");
    }

    #[test]
    fn opener_pool_falls_back_when_all_words_repeat() {
        let lex = lexicon(&["eerie", "alley", "speed"]);
        let mut s = Session::new(&lex, SessionConfig::default(), Selection::deterministic())
            .unwrap();

        assert!(s.suggest().is_some());
    }

    #[test]
    fn apply_filters_and_records_round() {
        let mut s = session(&["crane", "crate", "grate", "slate"]);
        let guess = Word::new("crane").unwrap();
        let target = Word::new("grate").unwrap();
        let feedback = Feedback::assess(&guess, &target);

        let state = s.apply(&guess, &feedback).unwrap();

        assert_eq!(s.rounds_played(), 1);
        assert_eq!(s.rounds()[0].guess().text(), "crane");
        assert_eq!(s.rounds()[0].code(), feedback.code());
        assert_eq!(s.rounds()[0].remaining(), s.candidates().len());
        assert!(s.candidates().len() <= 4);
        assert!(state == SessionState::Active || state == SessionState::Solved);
    }

    #[test]
    fn played_guess_is_removed_from_candidates() {
        // "GG-GG" on SPEED keeps SPEED itself alive through the rules (the
        // Excluded for the second E is satisfied by one confirmed E), so the
        // explicit drop of the played guess is what pins SPIED down
        let mut s = session(&["speed", "spied"]);
        let guess = Word::new("speed").unwrap();
        let feedback = Feedback::parse("GG-GG", &guess).unwrap();

        let state = s.apply(&guess, &feedback).unwrap();
        assert!(!s.candidates().contains(&guess));
        assert_eq!(state, SessionState::Solved);
        assert_eq!(s.solution().unwrap().text(), "spied");
    }

    #[test]
    fn non_win_feedback_never_settles_on_the_guess() {
        // "GG-GG" on SPEED disproves SPEED itself, and "about" fails the
        // rules outright; the session must contradict rather than report
        // the disproved guess as solved
        let mut s = session(&["speed", "about"]);
        let guess = Word::new("speed").unwrap();
        let feedback = Feedback::parse("GG-GG", &guess).unwrap();

        let err = s.apply(&guess, &feedback).unwrap_err();
        assert_eq!(err.round, 1);
        assert_eq!(err.guess, "speed");
        assert_eq!(err.feedback, "GG-GG");
        assert_eq!(s.state(), SessionState::Contradiction);
        assert_eq!(s.solution(), None);
    }

    #[test]
    fn winning_feedback_solves() {
        let mut s = session(&["crane", "crate", "grate", "slate"]);
        let guess = Word::new("crate").unwrap();
        let feedback = Feedback::parse("GGGGG", &guess).unwrap();

        let state = s.apply(&guess, &feedback).unwrap();
        assert_eq!(state, SessionState::Solved);
        assert_eq!(s.solution().unwrap().text(), "crate");
    }

    #[test]
    fn win_feedback_for_eliminated_word_contradicts() {
        // Claiming a win on a word the earlier rounds already ruled out
        // must surface the contradiction with full context
        // Round 1 keeps SLATE and PLATE and drops the disproved CRANE
        let mut s = session(&["crane", "slate", "plate"]);
        let crane = Word::new("crane").unwrap();
        s.apply(&crane, &Feedback::parse("--G-G", &crane).unwrap())
            .unwrap();
        assert_eq!(s.state(), SessionState::Active);
        assert!(!s.candidates().contains(&crane));

        let err = s
            .apply(&crane, &Feedback::parse("GGGGG", &crane).unwrap())
            .unwrap_err();
        assert_eq!(err.round, 2);
        assert_eq!(err.guess, "crane");
        assert_eq!(err.feedback, "GGGGG");
        assert_eq!(s.state(), SessionState::Contradiction);
    }

    #[test]
    fn contradictory_feedback_errors_with_context() {
        let mut s = session(&["crane", "crate", "grate"]);
        let guess = Word::new("crane").unwrap();
        // Claims the word contains no 'a', 'r', 'e' at all: nothing survives
        let feedback = Feedback::parse("-----", &guess).unwrap();

        let err = s.apply(&guess, &feedback).unwrap_err();
        assert_eq!(err.round, 1);
        assert_eq!(err.guess, "crane");
        assert_eq!(err.feedback, "-----");
        assert_eq!(s.state(), SessionState::Contradiction);

        let message = err.to_string();
        assert!(message.contains("crane"));
        assert!(message.contains("-----"));
        assert!(message.contains("Round 1"));
    }

    #[test]
    fn terminal_session_ignores_further_rounds() {
        let mut s = session(&["crane", "crate"]);
        let guess = Word::new("crane").unwrap();
        let win = Feedback::parse("GGGGG", &guess).unwrap();
        s.apply(&guess, &win).unwrap();
        assert_eq!(s.state(), SessionState::Solved);

        // A later apply neither records a round nor changes state
        let other = Word::new("crate").unwrap();
        let state = s.apply(&other, &Feedback::parse("-----", &other).unwrap());
        assert_eq!(state, Ok(SessionState::Solved));
        assert_eq!(s.rounds_played(), 1);
        assert!(s.suggest().is_none());
    }

    #[test]
    fn candidate_count_never_grows() {
        let texts = ["crane", "crate", "grate", "slate", "irate", "vague"];
        let target = Word::new("irate").unwrap();
        let mut s = session(&texts);

        let mut previous = s.candidates().len();
        while s.state() == SessionState::Active {
            let guess = s.suggest().unwrap();
            let feedback = Feedback::assess(&guess, &target);
            s.apply(&guess, &feedback).unwrap();
            assert!(s.candidates().len() <= previous);
            previous = s.candidates().len();
        }
    }

    #[test]
    fn ground_truth_play_never_eliminates_target() {
        let texts = ["crane", "crate", "grate", "slate", "irate", "speed", "alley"];
        for target_text in texts {
            let target = Word::new(target_text).unwrap();
            let mut s = session(&texts);

            while s.state() == SessionState::Active {
                let guess = s.suggest().unwrap();
                let feedback = Feedback::assess(&guess, &target);
                s.apply(&guess, &feedback).unwrap();
                if s.state() == SessionState::Active {
                    assert!(
                        s.candidates().contains(&target),
                        "target {target_text} eliminated after {} rounds",
                        s.rounds_played()
                    );
                }
            }

            assert_eq!(s.state(), SessionState::Solved);
            assert_eq!(s.solution(), Some(&target));
        }
    }

    #[test]
    fn converges_within_lexicon_size_rounds() {
        let texts = ["crane", "crate", "grate", "slate", "irate", "vague", "mount"];
        for target_text in texts {
            let target = Word::new(target_text).unwrap();

            // Both selection modes must terminate
            for selection in [Selection::deterministic(), Selection::seeded(99)] {
                let mut s = Session::new(
                    &lexicon(&texts),
                    SessionConfig::default(),
                    selection,
                )
                .unwrap();

                while s.state() == SessionState::Active {
                    let guess = s.suggest().unwrap();
                    let feedback = Feedback::assess(&guess, &target);
                    s.apply(&guess, &feedback).unwrap();
                    assert!(s.rounds_played() <= texts.len());
                }
                assert_eq!(s.solution(), Some(&target));
            }
        }
    }
}

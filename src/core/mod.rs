//! Core domain types
//!
//! The constraint model: words, the lexicon, feedback rules, and the
//! interpreter that derives rules from feedback. Everything here is pure and
//! has no I/O.

mod feedback;
mod lexicon;
mod rule;
mod word;

/// Word length for the standard game
pub const WORD_LEN: usize = 5;

pub use feedback::{Feedback, FeedbackError};
pub use lexicon::Lexicon;
pub use rule::{MatchedCounts, Rule, filter_candidates};
pub use word::{Word, WordError};

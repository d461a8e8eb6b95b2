//! The constraint-solving engine
//!
//! Letter-frequency opening guesses, injectable guess selection, and the
//! per-game session state machine.

pub mod frequency;
pub mod selection;
pub mod session;

pub use frequency::{EmptyLexiconError, FrequencyModel};
pub use selection::Selection;
pub use session::{ContradictionError, GuessRound, Session, SessionConfig, SessionState};

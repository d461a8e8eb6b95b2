//! Word lists
//!
//! Provides the embedded default word list plus file loading. These are the
//! lexicon-source collaborators; the constraint core only sees a built
//! [`crate::core::Lexicon`].

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

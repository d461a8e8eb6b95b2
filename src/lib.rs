//! Wordle Assistant
//!
//! A constraint-based Wordle helper: it scores words by letter frequency,
//! turns feedback into filtering rules, and narrows the candidate set round
//! by round until a single word remains.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_assistant::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! // Assess the guess against a known target
//! let feedback = Feedback::assess(&guess, &target);
//! println!("Feedback: {}", feedback.code());
//! ```

// Core domain types
pub mod core;

// Frequency model and solving sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

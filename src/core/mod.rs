//! Core domain types for the word game
//!
//! Pure types with no I/O: dictionary words, normalization and letter feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterMatch};
pub use word::{DEFAULT_DIFFICULTY, WORD_LENGTH, Word, normalize};

//! WordIn
//!
//! A Wordle-style word guessing game played through a chat front end, plus a
//! generic inline-button menu engine used for per-chat settings.
//!
//! # Quick Start
//!
//! ```rust
//! use wordin::core::{Feedback, Word};
//!
//! let secret = Word::new("amigo");
//! let feedback = Feedback::calculate("amado", secret.text());
//! assert_eq!(feedback.to_emoji(), "🟩🟩🟨⬛🟩");
//! ```

// Core domain types
pub mod core;

// Dictionaries and localized messages
pub mod language;

// Game sessions
pub mod game;

// Menu engine
pub mod menu;

// Messaging front ends
pub mod frontend;

// Per-chat settings
pub mod settings;

// Event dispatcher
pub mod bot;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};

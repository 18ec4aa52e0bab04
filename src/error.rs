//! Error types shared by the game, the menu engine and the front-end glue

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the requested language nor the default one could be loaded
    #[error("failed to load language {code} from {}: {reason}", path.display())]
    LanguageLoad {
        code: String,
        path: PathBuf,
        reason: String,
    },

    /// A language has no usable words
    #[error("dictionary for language {0} is empty")]
    EmptyDictionary(String),

    /// A message key is not present in the language data
    #[error("message key {0} is missing")]
    MissingKey(String),

    /// A message template references more arguments than were supplied
    #[error("message {key} expects argument #{index}")]
    MissingArgument { key: String, index: usize },

    /// A game operation was called in the wrong session state
    #[error("game session is {0}")]
    InvalidState(&'static str),

    /// The messaging front end refused a call
    #[error("transport error: {0}")]
    Transport(String),

    /// The settings collaborator failed
    #[error("settings error: {0}")]
    Settings(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

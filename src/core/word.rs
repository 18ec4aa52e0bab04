//! Dictionary word representation
//!
//! A Word keeps the normalized form used for every comparison next to the
//! original spelling that is shown back to players.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Length accepted for entries of plain text word lists
pub const WORD_LENGTH: usize = 5;

/// Difficulty assigned to words that do not carry one
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Strip spaces, decompose accents, drop combining marks and lowercase
///
/// Applied identically to dictionary entries and to guesses.
///
/// # Examples
/// ```
/// use wordin::core::normalize;
///
/// assert_eq!(normalize("Café s"), "cafes");
/// assert_eq!(normalize("AÇÃO"), "acao");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|&c| c != ' ')
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A dictionary entry
///
/// Serialized as `{ "word", "originalWord", "difficulty" }`, the layout of
/// JSON word lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    #[serde(rename = "word")]
    normalized: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_word: Option<String>,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
}

const fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

impl Word {
    /// Create a word from its original spelling
    ///
    /// # Examples
    /// ```
    /// use wordin::core::Word;
    ///
    /// let word = Word::new("Pão");
    /// assert_eq!(word.text(), "pao");
    /// assert_eq!(word.original(), "Pão");
    /// ```
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();

        Self {
            normalized: normalize(&original),
            original_word: Some(original),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Set the word difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// The normalized form
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// The original spelling, or the normalized form when none was recorded
    #[must_use]
    pub fn original(&self) -> &str {
        self.original_word.as_deref().unwrap_or(&self.normalized)
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Number of letters in the normalized form
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original())
    }
}

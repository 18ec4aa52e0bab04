//! Dictionary and language service
//!
//! Loads word lists and localized message templates per language code, and
//! exposes secret word selection, word lookup and message formatting.

mod dictionary;
pub mod loader;
mod messages;
mod registry;

pub use dictionary::{Dictionary, daily_index, daily_sample, date_seed};
pub use messages::{MessageKey, MessageText, Messages};
pub use registry::LanguageRegistry;

use crate::core::Word;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::fmt;
use std::path::Path;

/// A loaded language: dictionary plus message templates
#[derive(Debug, Clone)]
pub struct Language {
    code: String,
    name: String,
    dictionary: Dictionary,
    messages: Messages,
}

impl Language {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        dictionary: Dictionary,
        messages: Messages,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            dictionary,
            messages,
        }
    }

    /// Load the language for `code` from `dir`, falling back to `default_code`
    ///
    /// # Errors
    /// Returns [`Error::LanguageLoad`] when no language file is resolvable.
    pub fn load(dir: &Path, code: &str, default_code: &str) -> Result<Self> {
        loader::load_for_code(dir, code, default_code)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn is_word_present(&self, normalized: &str) -> bool {
        self.dictionary.is_word_present(normalized)
    }

    /// Format a localized message
    ///
    /// # Errors
    /// Returns [`Error::MissingKey`] or [`Error::MissingArgument`].
    pub fn message(&self, key: MessageKey, args: &[&dyn fmt::Display]) -> Result<String> {
        self.messages.format(key, args)
    }

    /// The word of the day for `date`
    ///
    /// # Errors
    /// Returns [`Error::EmptyDictionary`] if there is nothing to pick from.
    pub fn daily_word(&self, date: NaiveDate) -> Result<&Word> {
        self.dictionary
            .daily_word(date)
            .ok_or_else(|| Error::EmptyDictionary(self.code.clone()))
    }

    /// A random word
    ///
    /// # Errors
    /// Returns [`Error::EmptyDictionary`] if there is nothing to pick from.
    pub fn random_word(&self) -> Result<&Word> {
        self.dictionary
            .random_word()
            .ok_or_else(|| Error::EmptyDictionary(self.code.clone()))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    const MESSAGES: &str = r#"{
        "help": ["Guess the word!", "Reply to the game message."],
        "settings": "<b>Settings</b>",
        "settings.button.notify_daily_word": "Notify daily word",
        "settings.button.language": "Language",
        "settings.select.choose_option": "Choose an option:",
        "game.start": "A new game has started!",
        "game.win": "%s guessed it! The word was <b>%s</b>",
        "game.tries": "Tries left: %d",
        "game.answer_this_to_play": "Reply to this message to play %s",
        "game.error.length_not_equal": "The word must have %d letters",
        "game.error.word_not_present": "%s is not in the dictionary",
        "game.error.already_running": "A game is already running"
    }"#;

    /// Small English language used by unit tests
    pub(crate) fn english() -> Language {
        let words = [
            "amigo", "amado", "aaaaa", "carta", "fonte", "mundo", "piano", "sorvo",
        ]
        .into_iter()
        .map(Word::new)
        .collect();

        Language::new(
            "en_US",
            "English",
            Dictionary::new(words),
            serde_json::from_str(MESSAGES).unwrap(),
        )
    }

    /// Same messages, different code and words
    pub(crate) fn portuguese() -> Language {
        let words = ["lápis", "ações"].into_iter().map(Word::new).collect();

        Language::new(
            "pt_BR",
            "Português",
            Dictionary::new(words),
            serde_json::from_str(MESSAGES).unwrap(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_formats_messages() {
        let language = fixtures::english();
        assert_eq!(
            language.message(MessageKey::GameTries, &[&6]).unwrap(),
            "Tries left: 6"
        );
    }

    #[test]
    fn language_picks_words() {
        let language = fixtures::english();
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let daily = language.daily_word(day).unwrap();
        assert!(language.is_word_present(daily.text()));
        assert!(language.is_word_present(language.random_word().unwrap().text()));
    }

    #[test]
    fn language_with_empty_dictionary() {
        let language = Language::new("xx", "Empty", Dictionary::default(), Messages::default());
        assert!(matches!(
            language.random_word(),
            Err(Error::EmptyDictionary(code)) if code == "xx"
        ));
    }
}

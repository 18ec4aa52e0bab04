//! Runtime configuration

use crate::game::{DEFAULT_MAX_TRIES, GameMode};
use crate::settings::ChatSource;
use std::path::PathBuf;

/// Directory holding `<code>.json` language files
pub const DEFAULT_LANGUAGES_DIR: &str = "data/languages";

pub const DEFAULT_LANGUAGE: &str = "pt_BR";

/// Settings the bot is built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub languages_dir: PathBuf,
    /// Language used for new chats and when a code can't be resolved
    pub default_language: String,
    /// How `/start` picks the secret word
    pub mode: GameMode,
    pub max_tries: usize,
    /// Front end chats come from
    pub source: ChatSource,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            languages_dir: PathBuf::from(DEFAULT_LANGUAGES_DIR),
            default_language: DEFAULT_LANGUAGE.to_string(),
            mode: GameMode::DailyWord,
            max_tries: DEFAULT_MAX_TRIES,
            source: ChatSource::Telegram,
        }
    }
}

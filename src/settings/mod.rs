//! Per-chat settings collaborator
//!
//! The bot only needs a chat record (language and notification flag) and
//! typed get/set access to individual settings.

mod memory;

pub use memory::MemorySettingsStore;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// A setting stored on a chat record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatSetting {
    LanguageId,
    NotifyDailyWord,
}

impl ChatSetting {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LanguageId => "languageId",
            Self::NotifyDailyWord => "notifyDailyWord",
        }
    }
}

impl fmt::Display for ChatSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value read from or written to a setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
    Number(i64),
}

impl SettingValue {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Front end a chat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatSource {
    Telegram,
    Discord,
    Console,
}

impl ChatSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Discord => "discord",
            Self::Console => "console",
        }
    }
}

/// Internal chat identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRecord {
    pub id: RecordId,
    pub language_id: String,
    pub notify_daily_word: bool,
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_chat_setting(&self, chat: RecordId, key: ChatSetting) -> Result<SettingValue>;

    async fn set_chat_setting(
        &self,
        chat: RecordId,
        key: ChatSetting,
        value: SettingValue,
    ) -> Result<()>;

    /// Look up the record for a front-end chat, creating it on first contact
    async fn get_or_create_chat_record(
        &self,
        external_id: &str,
        source: ChatSource,
    ) -> Result<ChatRecord>;
}

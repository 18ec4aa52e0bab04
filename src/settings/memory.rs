//! In-memory settings store with sequential record ids

use super::{ChatRecord, ChatSetting, ChatSource, RecordId, SettingValue, SettingsStore};
use crate::error::{Error, Result};
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    external: FxHashMap<(ChatSource, String), RecordId>,
    records: FxHashMap<RecordId, ChatRecord>,
}

/// Settings kept in process memory
///
/// Records are numbered sequentially in creation order. New chats get the
/// default language and daily notifications turned off.
#[derive(Debug)]
pub struct MemorySettingsStore {
    default_language: String,
    inner: Mutex<Inner>,
}

impl MemorySettingsStore {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Snapshot of a record
    pub async fn record(&self, chat: RecordId) -> Option<ChatRecord> {
        self.inner.lock().await.records.get(&chat).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.records.is_empty()
    }
}

fn unknown_chat(chat: RecordId) -> Error {
    Error::settings(format!("chat {chat} does not exist"))
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_chat_setting(&self, chat: RecordId, key: ChatSetting) -> Result<SettingValue> {
        let inner = self.inner.lock().await;
        let record = inner.records.get(&chat).ok_or_else(|| unknown_chat(chat))?;

        Ok(match key {
            ChatSetting::LanguageId => SettingValue::Text(record.language_id.clone()),
            ChatSetting::NotifyDailyWord => SettingValue::Bool(record.notify_daily_word),
        })
    }

    async fn set_chat_setting(
        &self,
        chat: RecordId,
        key: ChatSetting,
        value: SettingValue,
    ) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let record = inner
            .records
            .get_mut(&chat)
            .ok_or_else(|| unknown_chat(chat))?;

        match (key, value) {
            (ChatSetting::LanguageId, SettingValue::Text(code)) => record.language_id = code,
            (ChatSetting::NotifyDailyWord, SettingValue::Bool(flag)) => {
                record.notify_daily_word = flag;
            }
            (key, value) => {
                return Err(Error::settings(format!(
                    "{key} can't be set to {value:?}"
                )));
            }
        }

        debug!("chat {chat}: updated {key}");
        Ok(())
    }

    async fn get_or_create_chat_record(
        &self,
        external_id: &str,
        source: ChatSource,
    ) -> Result<ChatRecord> {
        let mut inner = self.inner.lock().await;
        let key = (source, external_id.to_string());

        if let Some(record) = inner.external.get(&key).and_then(|id| inner.records.get(id)) {
            return Ok(record.clone());
        }

        inner.next_id += 1;
        let record = ChatRecord {
            id: RecordId(inner.next_id),
            language_id: self.default_language.clone(),
            notify_daily_word: false,
        };

        info!(
            "created chat {} for {} chat {external_id}",
            record.id,
            source.as_str()
        );
        inner.external.insert(key, record.id);
        inner.records.insert(record.id, record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_are_created_once_per_source() {
        let store = MemorySettingsStore::new("pt_BR");

        let first = store
            .get_or_create_chat_record("42", ChatSource::Telegram)
            .await
            .unwrap();
        let again = store
            .get_or_create_chat_record("42", ChatSource::Telegram)
            .await
            .unwrap();
        let other = store
            .get_or_create_chat_record("42", ChatSource::Discord)
            .await
            .unwrap();

        assert_eq!(first, again);
        assert_eq!(first.id, RecordId(1));
        assert_eq!(other.id, RecordId(2));
        assert_eq!(first.language_id, "pt_BR");
        assert!(!first.notify_daily_word);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let store = MemorySettingsStore::new("pt_BR");
        let record = store
            .get_or_create_chat_record("1", ChatSource::Console)
            .await
            .unwrap();

        store
            .set_chat_setting(record.id, ChatSetting::NotifyDailyWord, SettingValue::Bool(true))
            .await
            .unwrap();
        store
            .set_chat_setting(
                record.id,
                ChatSetting::LanguageId,
                SettingValue::Text("en_US".into()),
            )
            .await
            .unwrap();

        let stored = store.record(record.id).await.unwrap();
        assert!(stored.notify_daily_word);
        assert_eq!(stored.language_id, "en_US");
        assert_eq!(
            store
                .get_chat_setting(record.id, ChatSetting::LanguageId)
                .await
                .unwrap(),
            SettingValue::Text("en_US".into())
        );
    }

    #[tokio::test]
    async fn wrong_value_type_is_rejected() {
        let store = MemorySettingsStore::new("pt_BR");
        let record = store
            .get_or_create_chat_record("1", ChatSource::Console)
            .await
            .unwrap();

        let result = store
            .set_chat_setting(record.id, ChatSetting::NotifyDailyWord, SettingValue::Number(1))
            .await;
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[tokio::test]
    async fn unknown_chat_is_an_error() {
        let store = MemorySettingsStore::new("pt_BR");
        assert!(
            store
                .get_chat_setting(RecordId(9), ChatSetting::LanguageId)
                .await
                .is_err()
        );
    }
}

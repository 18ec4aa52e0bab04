//! In-memory transport
//!
//! Keeps the current state of every message and a log of every call, and can
//! be told to refuse specific deletions or every edit.

use super::{CallbackRef, ChatAction, ChatId, Keyboard, MessageRef, Messenger};
use crate::error::{Error, Result};
use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Current content of a message sent through the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub chat: ChatId,
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

/// One recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessengerCall {
    Send { chat: ChatId, message: MessageRef },
    Edit { chat: ChatId, message: MessageRef },
    Delete { chat: ChatId, message: MessageRef },
    AnswerCallback(CallbackRef),
    ChatAction { chat: ChatId, action: ChatAction },
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    messages: FxHashMap<MessageRef, StoredMessage>,
    calls: Vec<MessengerCall>,
    refuse_delete: FxHashSet<MessageRef>,
    refuse_edits: bool,
}

#[derive(Debug, Default)]
pub struct MemoryMessenger {
    state: Mutex<State>,
}

impl MemoryMessenger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserve a message reference, e.g. for an inbound user message
    pub fn allocate_ref(&self) -> MessageRef {
        let mut state = self.state();
        state.next_id += 1;
        MessageRef(state.next_id)
    }

    /// Make every future deletion of `message` fail
    pub fn refuse_delete(&self, message: MessageRef) {
        self.state().refuse_delete.insert(message);
    }

    /// Make edits fail until called again with `false`
    pub fn refuse_edits(&self, refuse: bool) {
        self.state().refuse_edits = refuse;
    }

    #[must_use]
    pub fn message(&self, message: MessageRef) -> Option<StoredMessage> {
        self.state().messages.get(&message).cloned()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<MessengerCall> {
        self.state().calls.clone()
    }

    /// Messages whose deletion was attempted, in call order
    #[must_use]
    pub fn delete_attempts(&self) -> Vec<MessageRef> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                MessengerCall::Delete { message, .. } => Some(*message),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn answered_callbacks(&self) -> Vec<CallbackRef> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                MessengerCall::AnswerCallback(callback) => Some(callback.clone()),
                _ => None,
            })
            .collect()
    }

    /// Text of the most recently sent message
    #[must_use]
    pub fn last_sent(&self) -> Option<(MessageRef, StoredMessage)> {
        let state = self.state();
        state.calls.iter().rev().find_map(|call| match call {
            MessengerCall::Send { message, .. } => state
                .messages
                .get(message)
                .map(|stored| (*message, stored.clone())),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, matches: impl Fn(&MessengerCall) -> bool) -> usize {
        self.state().calls.iter().filter(|call| matches(call)).count()
    }
}

#[async_trait]
impl Messenger for MemoryMessenger {
    async fn send_message(
        &self,
        chat: ChatId,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageRef> {
        let mut state = self.state();
        state.next_id += 1;
        let message = MessageRef(state.next_id);

        state.messages.insert(
            message,
            StoredMessage {
                chat,
                text: html.to_string(),
                keyboard: keyboard.cloned(),
            },
        );
        state.calls.push(MessengerCall::Send { chat, message });

        Ok(message)
    }

    async fn edit_message_text(
        &self,
        chat: ChatId,
        message: MessageRef,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        let mut state = self.state();
        state.calls.push(MessengerCall::Edit { chat, message });

        if state.refuse_edits {
            return Err(Error::transport(format!("message {message} can't be edited")));
        }

        let stored = state
            .messages
            .get_mut(&message)
            .filter(|stored| stored.chat == chat)
            .ok_or_else(|| Error::transport(format!("message {message} not found")))?;

        stored.text = html.to_string();
        stored.keyboard = keyboard.cloned();
        Ok(())
    }

    async fn delete_message(&self, chat: ChatId, message: MessageRef) -> Result<()> {
        let mut state = self.state();
        state.calls.push(MessengerCall::Delete { chat, message });

        if state.refuse_delete.contains(&message) {
            return Err(Error::transport(format!("message {message} can't be deleted")));
        }

        state.messages.remove(&message);
        Ok(())
    }

    async fn answer_callback(&self, callback: &CallbackRef) -> Result<()> {
        self.state()
            .calls
            .push(MessengerCall::AnswerCallback(callback.clone()));
        Ok(())
    }

    async fn send_chat_action(&self, chat: ChatId, action: ChatAction) -> Result<()> {
        self.state()
            .calls
            .push(MessengerCall::ChatAction { chat, action });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::InlineButton;

    #[tokio::test]
    async fn send_then_edit() {
        let messenger = MemoryMessenger::new();
        let chat = ChatId(1);

        let mut keyboard = Keyboard::new();
        keyboard.push(InlineButton::new("A", "m/a"));

        let message = messenger
            .send_message(chat, "hello", Some(&keyboard))
            .await
            .unwrap();
        messenger
            .edit_message_text(chat, message, "bye", None)
            .await
            .unwrap();

        let stored = messenger.message(message).unwrap();
        assert_eq!(stored.text, "bye");
        assert!(stored.keyboard.is_none());
        assert_eq!(messenger.calls().len(), 2);
    }

    #[tokio::test]
    async fn edit_unknown_message_fails() {
        let messenger = MemoryMessenger::new();
        assert!(
            messenger
                .edit_message_text(ChatId(1), MessageRef(99), "x", None)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn refused_deletions_fail_but_are_recorded() {
        let messenger = MemoryMessenger::new();
        let chat = ChatId(1);
        let keep = messenger.send_message(chat, "keep", None).await.unwrap();
        let gone = messenger.send_message(chat, "gone", None).await.unwrap();
        messenger.refuse_delete(keep);

        assert!(messenger.delete_message(chat, keep).await.is_err());
        assert!(messenger.delete_message(chat, gone).await.is_ok());

        assert_eq!(messenger.delete_attempts(), vec![keep, gone]);
        assert!(messenger.message(keep).is_some());
        assert!(messenger.message(gone).is_none());
    }

    #[tokio::test]
    async fn refused_edits_leave_the_message_unchanged() {
        let messenger = MemoryMessenger::new();
        let chat = ChatId(1);
        let message = messenger.send_message(chat, "before", None).await.unwrap();

        messenger.refuse_edits(true);
        assert!(messenger.edit_message_text(chat, message, "after", None).await.is_err());
        assert_eq!(messenger.message(message).unwrap().text, "before");

        messenger.refuse_edits(false);
        messenger.edit_message_text(chat, message, "after", None).await.unwrap();
        assert_eq!(messenger.message(message).unwrap().text, "after");
    }

    #[tokio::test]
    async fn allocated_refs_do_not_collide_with_sent_messages() {
        let messenger = MemoryMessenger::new();
        let inbound = messenger.allocate_ref();
        let sent = messenger.send_message(ChatId(1), "x", None).await.unwrap();
        assert_ne!(inbound, sent);
        assert_eq!(messenger.last_sent().unwrap().0, sent);
    }
}

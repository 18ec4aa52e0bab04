//! Messaging front end
//!
//! The game and the menu engine talk to a chat transport only through the
//! [`Messenger`] trait. Message bodies are HTML.

pub mod console;
mod memory;

pub use console::ConsoleMessenger;
pub use memory::{MemoryMessenger, MessengerCall, StoredMessage};

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Chat identifier on the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a message inside a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageRef(pub i64);

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to a button press that must be acknowledged
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallbackRef(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
}

/// A button carrying an action identifier as its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub action: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: action.into(),
        }
    }
}

/// Grid of inline buttons attached to a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<Vec<InlineButton>>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row holding a single button
    pub fn push(&mut self, button: InlineButton) {
        self.rows.push(vec![button]);
    }

    pub fn push_row(&mut self, row: Vec<InlineButton>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<InlineButton>] {
        &self.rows
    }

    /// Every button, row by row
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }

    /// First button whose payload is `action`
    #[must_use]
    pub fn button_for(&self, action: &str) -> Option<&InlineButton> {
        self.buttons().find(|b| b.action == action)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outbound side of a chat transport
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a new message, returning its reference
    async fn send_message(
        &self,
        chat: ChatId,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageRef>;

    /// Replace the text (and keyboard) of a message
    async fn edit_message_text(
        &self,
        chat: ChatId,
        message: MessageRef,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()>;

    async fn delete_message(&self, chat: ChatId, message: MessageRef) -> Result<()>;

    /// Acknowledge a button press
    async fn answer_callback(&self, callback: &CallbackRef) -> Result<()>;

    async fn send_chat_action(&self, chat: ChatId, action: ChatAction) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_lookup() {
        let mut keyboard = Keyboard::new();
        keyboard.push(InlineButton::new("One", "menu/one"));
        keyboard.push_row(vec![
            InlineButton::new("Two", "menu/two"),
            InlineButton::new("Three", "menu/three"),
        ]);

        assert_eq!(keyboard.rows().len(), 2);
        assert_eq!(keyboard.buttons().count(), 3);
        assert_eq!(keyboard.button_for("menu/two").unwrap().text, "Two");
        assert!(keyboard.button_for("menu/four").is_none());
    }

    #[test]
    fn refs_display() {
        assert_eq!(ChatId(42).to_string(), "42");
        assert_eq!(MessageRef(7).to_string(), "#7");
    }
}

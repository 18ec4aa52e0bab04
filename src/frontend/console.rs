//! Terminal transport
//!
//! Prints every message the bot sends or edits, with its inline keyboard, so
//! the game and the menus can be played from a shell.

use super::{CallbackRef, ChatAction, ChatId, Keyboard, MessageRef, Messenger};
use crate::error::Result;
use crate::output::formatters::html_to_terminal;
use async_trait::async_trait;
use colored::Colorize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ConsoleMessenger {
    next_id: AtomicI64,
    last_keyboard: Mutex<Option<MessageRef>>,
}

impl ConsoleMessenger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a message reference for an inbound line
    pub fn allocate_ref(&self) -> MessageRef {
        MessageRef(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The latest message that carried buttons
    #[must_use]
    pub fn last_keyboard_message(&self) -> Option<MessageRef> {
        *self
            .last_keyboard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn remember_keyboard(&self, message: MessageRef, keyboard: Option<&Keyboard>) {
        if keyboard.is_some_and(|k| !k.is_empty()) {
            *self
                .last_keyboard
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(message);
        }
    }

    fn print(label: &str, message: MessageRef, html: &str, keyboard: Option<&Keyboard>) {
        println!("{}", "─".repeat(40).bright_black());
        println!("{} {}", message.to_string().bright_black(), label.cyan());
        println!("{}", html_to_terminal(html));

        for row in keyboard.map(Keyboard::rows).unwrap_or_default() {
            let buttons: Vec<String> = row
                .iter()
                .map(|b| format!("[{}] {}", b.text, format!("@{}", b.action).bright_black()))
                .collect();
            println!("  {}", buttons.join("  "));
        }
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn send_message(
        &self,
        _chat: ChatId,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageRef> {
        let message = self.allocate_ref();
        Self::print("bot", message, html, keyboard);
        self.remember_keyboard(message, keyboard);
        Ok(message)
    }

    async fn edit_message_text(
        &self,
        _chat: ChatId,
        message: MessageRef,
        html: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        Self::print("bot (edited)", message, html, keyboard);
        self.remember_keyboard(message, keyboard);
        Ok(())
    }

    async fn delete_message(&self, _chat: ChatId, message: MessageRef) -> Result<()> {
        println!("{}", format!("{message} deleted").bright_black());
        Ok(())
    }

    async fn answer_callback(&self, callback: &CallbackRef) -> Result<()> {
        debug!("answered callback {}", callback.0);
        Ok(())
    }

    async fn send_chat_action(&self, chat: ChatId, action: ChatAction) -> Result<()> {
        debug!("chat {chat}: {action:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::InlineButton;

    #[tokio::test]
    async fn tracks_messages_with_buttons() {
        let messenger = ConsoleMessenger::new();
        let chat = ChatId(1);

        let plain = messenger.send_message(chat, "plain", None).await.unwrap();
        assert_eq!(messenger.last_keyboard_message(), None);

        let mut keyboard = Keyboard::new();
        keyboard.push(InlineButton::new("A", "m/a"));
        let menu = messenger
            .send_message(chat, "<b>menu</b>", Some(&keyboard))
            .await
            .unwrap();

        assert_ne!(plain, menu);
        assert_eq!(messenger.last_keyboard_message(), Some(menu));
        assert!(messenger.allocate_ref().0 > menu.0);
    }
}

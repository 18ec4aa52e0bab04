//! A menu rendered for one interaction

use super::{Menu, MenuOption, OptionKind};
use crate::error::Result;
use crate::frontend::{ChatId, InlineButton, Keyboard, MessageRef, Messenger};
use crate::language::{Language, MessageKey};
use crate::settings::{ChatRecord, SettingsStore};
use std::sync::Arc;

const BACK_BUTTON: &str = "🔙";

/// Live front-end context of one interaction
pub struct MenuContext<'a> {
    pub chat: ChatId,
    /// Message holding the menu, when the interaction came from one of its buttons
    pub message: Option<MessageRef>,
    pub record: ChatRecord,
    pub language: Arc<Language>,
    pub settings: &'a dyn SettingsStore,
    pub messenger: &'a dyn Messenger,
}

/// A declaration bound to a [`MenuContext`]
pub struct MenuInstance<'a> {
    menu: &'a Menu,
    context: MenuContext<'a>,
}

impl<'a> MenuInstance<'a> {
    #[must_use]
    pub fn new(menu: &'a Menu, context: MenuContext<'a>) -> Self {
        Self { menu, context }
    }

    #[must_use]
    pub const fn menu(&self) -> &Menu {
        self.menu
    }

    #[must_use]
    pub const fn context(&self) -> &MenuContext<'a> {
        &self.context
    }

    /// Title in the chat language
    ///
    /// # Errors
    /// Returns an error if a symbolic title can't be formatted.
    pub fn title(&self) -> Result<String> {
        self.menu.title().resolve(&self.context.language)
    }

    /// Button text for `option`; toggles show their current state
    ///
    /// # Errors
    /// Returns an error if the label can't be resolved or the toggle value
    /// can't be read.
    pub async fn option_text(&self, option: &MenuOption) -> Result<String> {
        let text = option.label.resolve(&self.context.language)?;

        Ok(match &option.kind {
            OptionKind::Toggle(accessor) => {
                let enabled = accessor.get(self).await?.as_bool().unwrap_or(false);
                format!("{} {text}", if enabled { "✅" } else { "❌" })
            }
            _ => text,
        })
    }

    /// One button per option, in declaration order
    ///
    /// # Errors
    /// Propagates errors from [`Self::option_text`].
    pub async fn keyboard(&self) -> Result<Keyboard> {
        let mut keyboard = Keyboard::new();
        for option in self.menu.options() {
            let text = self.option_text(option).await?;
            keyboard.push(InlineButton::new(text, self.menu.normalize_id(&[&option.id])));
        }
        Ok(keyboard)
    }

    /// Sub-view listing the candidates of a select option
    ///
    /// The current value is marked and a back button returns to the menu.
    /// Returns `None` for options that are not selects.
    ///
    /// # Errors
    /// Returns an error if the title can't be resolved or the current value
    /// can't be read.
    pub async fn select_view(&self, option: &MenuOption) -> Result<Option<(String, Keyboard)>> {
        let OptionKind::Select { choices, accessor } = &option.kind else {
            return Ok(None);
        };

        let title = format!(
            "{}\n\n{}",
            self.title()?,
            self.context
                .language
                .message(MessageKey::SettingsSelectChooseOption, &[])?
        );

        let current = accessor.get(self).await?;
        let current = current.as_text();

        let mut keyboard = Keyboard::new();
        for choice in choices {
            let text = if current == Some(choice.value.as_str()) {
                format!("✅ {}", choice.label)
            } else {
                choice.label.clone()
            };
            keyboard.push(InlineButton::new(
                text,
                self.menu.normalize_id(&[&option.id, &choice.value]),
            ));
        }
        keyboard.push(InlineButton::new(BACK_BUTTON, self.menu.root_action()));

        Ok(Some((title, keyboard)))
    }

    /// Send the menu, or edit it in place when `edit` is set and the
    /// interaction came from the menu message
    ///
    /// # Errors
    /// Returns rendering or transport errors.
    pub async fn answer(&self, edit: bool) -> Result<MessageRef> {
        let title = self.title()?;
        let keyboard = self.keyboard().await?;
        self.show(&title, &keyboard, edit).await
    }

    /// Replace the menu message with the candidates of a select option
    ///
    /// # Errors
    /// Returns rendering or transport errors.
    pub async fn answer_select(&self, option: &MenuOption) -> Result<MessageRef> {
        match self.select_view(option).await? {
            Some((title, keyboard)) => self.show(&title, &keyboard, true).await,
            None => self.answer(true).await,
        }
    }

    async fn show(&self, html: &str, keyboard: &Keyboard, edit: bool) -> Result<MessageRef> {
        let context = &self.context;

        match context.message.filter(|_| edit) {
            Some(message) => {
                context
                    .messenger
                    .edit_message_text(context.chat, message, html, Some(keyboard))
                    .await?;
                Ok(message)
            }
            None => {
                context
                    .messenger
                    .send_message(context.chat, html, Some(keyboard))
                    .await
            }
        }
    }
}

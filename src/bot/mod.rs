//! Chat event dispatcher
//!
//! Routes inbound commands, replies and button presses either to the game
//! session of the chat or to the menu router, one event at a time.

mod command;
mod settings_menu;

pub use command::Command;
pub use settings_menu::{SETTINGS_MENU_ID, settings_menu};

use crate::config::BotConfig;
use crate::error::Result;
use crate::frontend::{CallbackRef, ChatAction, ChatId, MessageRef, Messenger};
use crate::game::{Guess, Session, SessionRegistry};
use crate::language::{Language, LanguageRegistry, MessageKey};
use crate::menu::{ActionRouter, Dispatch, Menu, MenuContext};
use crate::settings::{ChatRecord, SettingsStore};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Inbound event from the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Message {
        chat: ChatId,
        message: MessageRef,
        author: String,
        text: String,
        /// Message this one replies to
        reply_to: Option<MessageRef>,
    },
    Callback {
        chat: ChatId,
        /// Message carrying the pressed button
        message: Option<MessageRef>,
        callback: CallbackRef,
        data: String,
    },
}

impl ChatEvent {
    #[must_use]
    pub const fn chat(&self) -> ChatId {
        match self {
            Self::Message { chat, .. } | Self::Callback { chat, .. } => *chat,
        }
    }
}

pub struct Bot<M, S> {
    config: BotConfig,
    languages: Arc<LanguageRegistry>,
    messenger: M,
    settings: S,
    sessions: SessionRegistry,
    router: ActionRouter,
    settings_menu: Arc<Menu>,
    today: Option<NaiveDate>,
}

impl<M: Messenger, S: SettingsStore> Bot<M, S> {
    /// Build the bot and compile its menus
    pub fn new(config: BotConfig, languages: Arc<LanguageRegistry>, messenger: M, settings: S) -> Self {
        let settings_menu = Arc::new(settings_menu(&languages));

        let mut router = ActionRouter::new();
        router.register(Arc::clone(&settings_menu));

        Self {
            config,
            languages,
            messenger,
            settings,
            sessions: SessionRegistry::new(),
            router,
            settings_menu,
            today: None,
        }
    }

    /// Use a fixed date for daily words instead of the local clock
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    #[must_use]
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    #[must_use]
    pub fn settings(&self) -> &S {
        &self.settings
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// The message players of `chat` reply to, if a game is running
    #[must_use]
    pub fn progress_message(&self, chat: ChatId) -> Option<MessageRef> {
        self.sessions.get(chat).and_then(Session::progress_message)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle one inbound event
    ///
    /// # Errors
    /// Returns settings, rendering or transport errors. Callbacks are
    /// acknowledged even when their handling fails.
    pub async fn handle(&mut self, event: ChatEvent) -> Result<()> {
        let chat = event.chat();

        if let Err(e) = self
            .messenger
            .send_chat_action(chat, ChatAction::Typing)
            .await
        {
            debug!("chat {chat}: typing action failed: {e}");
        }

        let record = self
            .settings
            .get_or_create_chat_record(&chat.to_string(), self.config.source)
            .await?;
        let language = self.languages.get(&record.language_id);

        match event {
            ChatEvent::Message {
                message,
                author,
                text,
                reply_to,
                ..
            } => match Command::parse(&text).map(|command| command.name.to_string()).as_deref() {
                Some("start") => self.start(chat, language).await,
                Some("help") => {
                    let help = language.message(MessageKey::Help, &[])?;
                    self.messenger.send_message(chat, &help, None).await?;
                    Ok(())
                }
                Some("settings") => {
                    self.settings_menu
                        .instance(self.menu_context(chat, None, record, language))
                        .answer(false)
                        .await?;
                    Ok(())
                }
                _ => {
                    let guess = Guess {
                        message,
                        text,
                        author,
                    };
                    self.reply(chat, &guess, reply_to).await
                }
            },
            ChatEvent::Callback {
                message,
                callback,
                data,
                ..
            } => {
                let context = self.menu_context(chat, message, record, language);
                if self.router.dispatch(&data, &callback, context).await? == Dispatch::Unrouted {
                    warn!("chat {chat}: no menu listens for action {data}");
                }
                Ok(())
            }
        }
    }

    async fn start(&mut self, chat: ChatId, language: Arc<Language>) -> Result<()> {
        if self.sessions.contains(chat) {
            let text = language.message(MessageKey::GameErrorAlreadyRunning, &[])?;
            self.messenger.send_message(chat, &text, None).await?;
            return Ok(());
        }

        let today = self.today();
        let mut session = Session::new(chat, self.config.mode, language, self.config.max_tries);
        session.start(&self.messenger, today).await?;
        self.sessions.insert(session);

        Ok(())
    }

    async fn reply(&mut self, chat: ChatId, guess: &Guess, reply_to: Option<MessageRef>) -> Result<()> {
        let Some(session) = self.sessions.get_mut(chat) else {
            return Ok(());
        };

        if !reply_to.is_some_and(|message| session.is_for_message(message)) {
            return Ok(());
        }

        let outcome = session.process(guess, &self.messenger).await;

        // A finished session is released even if its last render failed
        if self.sessions.release_finished(chat).is_some() {
            info!("game in chat {chat} finished");
        }

        debug!("chat {chat}: {:?}", outcome?);
        Ok(())
    }

    fn menu_context(
        &self,
        chat: ChatId,
        message: Option<MessageRef>,
        record: ChatRecord,
        language: Arc<Language>,
    ) -> MenuContext<'_> {
        MenuContext {
            chat,
            message,
            record,
            language,
            settings: &self.settings,
            messenger: &self.messenger,
        }
    }
}

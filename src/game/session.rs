//! Game session state machine
//!
//! `Created -> InProgress -> Ended`. A session accepts guesses only while in
//! progress and while tries remain.

use crate::core::{Feedback, WORD_LENGTH, Word, normalize};
use crate::error::{Error, Result};
use crate::frontend::{ChatId, MessageRef, Messenger};
use crate::language::{Language, MessageKey};
use chrono::NaiveDate;
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of guesses a session allows unless configured otherwise
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Row shown for every unused try, one square per letter
const EMPTY_SLOT: &str = "⬜\u{fe0f}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Everyone gets the same word on the same day
    #[default]
    DailyWord,
    RandomWord,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DailyWord => "daily",
            Self::RandomWord => "random",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    InProgress,
    Ended,
}

/// A reply to the progress message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub message: MessageRef,
    pub text: String,
    /// Display name used in the win message
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    LengthMismatch { expected: usize, actual: usize },
    NotInDictionary(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was deleted and no try was consumed
    Rejected(RejectReason),
    Miss(Feedback),
    Won,
    /// The session no longer accepts guesses
    Closed,
}

/// Difficulty as a row of five squares
///
/// # Examples
/// ```
/// use wordin::game::difficulty_hint;
///
/// assert_eq!(difficulty_hint(3), "🟩🟩🟩⬛⬛");
/// assert_eq!(difficulty_hint(9), "🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn difficulty_hint(difficulty: u8) -> String {
    let filled = usize::from(difficulty).min(WORD_LENGTH);
    format!("{}{}", "🟩".repeat(filled), "⬛".repeat(WORD_LENGTH - filled))
}

#[derive(Debug)]
pub struct Session {
    chat: ChatId,
    mode: GameMode,
    language: Arc<Language>,
    max_tries: usize,
    state: SessionState,
    secret: Option<Word>,
    tries: Vec<Feedback>,
    replies: Vec<MessageRef>,
    progress: Option<MessageRef>,
}

impl Session {
    #[must_use]
    pub fn new(
        chat: ChatId,
        mode: GameMode,
        language: Arc<Language>,
        max_tries: usize,
    ) -> Self {
        Self {
            chat,
            mode,
            language,
            max_tries,
            state: SessionState::Created,
            secret: None,
            tries: Vec::new(),
            replies: Vec::new(),
            progress: None,
        }
    }

    /// Pick the secret word by mode and announce the game
    ///
    /// # Errors
    /// Returns an error if the session was already started, the dictionary is
    /// empty or the front end fails.
    pub async fn start(&mut self, messenger: &dyn Messenger, today: NaiveDate) -> Result<()> {
        let secret = match self.mode {
            GameMode::DailyWord => self.language.daily_word(today)?,
            GameMode::RandomWord => self.language.random_word()?,
        }
        .clone();

        self.start_with(secret, messenger).await
    }

    /// Start with a known secret word
    ///
    /// # Errors
    /// Returns an error if the session was already started or the front end
    /// fails.
    pub async fn start_with(&mut self, secret: Word, messenger: &dyn Messenger) -> Result<()> {
        if self.state != SessionState::Created {
            return Err(Error::InvalidState("already started"));
        }

        info!(
            "new game started in chat {}, word is {} and difficulty is {}",
            self.chat,
            secret.original(),
            secret.difficulty()
        );

        self.secret = Some(secret);
        self.state = SessionState::InProgress;

        let start = self.language.message(MessageKey::GameStart, &[])?;
        messenger.send_message(self.chat, &start, None).await?;

        self.render_progress(None, None, messenger).await
    }

    /// Check a guess against the secret word
    ///
    /// Guesses with the wrong length or missing from the dictionary are
    /// deleted and answered with an error header without consuming a try.
    ///
    /// # Errors
    /// Returns rendering or transport errors. Failed deletions are only
    /// logged.
    pub async fn process(&mut self, guess: &Guess, messenger: &dyn Messenger) -> Result<GuessOutcome> {
        if self.state != SessionState::InProgress || self.is_out_of_tries() {
            return Ok(GuessOutcome::Closed);
        }
        let Some(secret) = self.secret.clone() else {
            return Err(Error::InvalidState("missing secret word"));
        };

        let word = normalize(&guess.text);
        let expected = secret.len();
        let actual = word.chars().count();

        let rejection = if actual != expected {
            debug!("given length {actual} is different than word length {expected}");
            Some((
                RejectReason::LengthMismatch { expected, actual },
                self.language
                    .message(MessageKey::GameErrorLengthNotEqual, &[&expected])?,
            ))
        } else if !self.language.is_word_present(&word) {
            debug!("word {word} is not present in the dictionary");
            let text = self
                .language
                .message(MessageKey::GameErrorWordNotPresent, &[&word])?;
            Some((RejectReason::NotInDictionary(word.clone()), text))
        } else {
            None
        };

        if let Some((reason, text)) = rejection {
            if let Err(e) = messenger.delete_message(self.chat, guess.message).await {
                warn!("failed to delete rejected guess {}: {e}", guess.message);
            }
            self.render_progress(Some(&format!("❌ <b>{text}</b>")), None, messenger)
                .await?;
            return Ok(GuessOutcome::Rejected(reason));
        }

        self.replies.push(guess.message);

        if word == secret.text() {
            self.end(&secret, &guess.author, messenger).await?;
            return Ok(GuessOutcome::Won);
        }

        let feedback = Feedback::calculate(&word, secret.text());
        debug!("{} tried word {word}: {feedback}", guess.author);

        self.tries.push(feedback.clone());
        self.render_progress(None, None, messenger).await?;

        if self.is_out_of_tries() {
            info!("chat {} ran out of tries", self.chat);
        }

        Ok(GuessOutcome::Miss(feedback))
    }

    async fn end(&mut self, secret: &Word, author: &str, messenger: &dyn Messenger) -> Result<()> {
        self.state = SessionState::Ended;
        debug!("{author} won the game in chat {}", self.chat);

        self.tries.push(Feedback::perfect(secret.len()));

        let rendered = match self
            .language
            .message(MessageKey::GameWin, &[&author, &secret.original()])
        {
            Ok(header) => self.render_progress(Some(&header), None, messenger).await,
            Err(e) => Err(e),
        };

        // Replies are deleted even when the final render failed
        let chat = self.chat;
        let results = join_all(
            self.replies
                .drain(..)
                .map(|reply| async move { (reply, messenger.delete_message(chat, reply).await) }),
        )
        .await;

        for (reply, result) in results {
            if let Err(e) = result {
                warn!("failed to delete reply {reply}: {e}");
            }
        }

        rendered
    }

    /// Compose the progress view
    ///
    /// # Errors
    /// Returns an error if a message template can't be formatted.
    pub fn progress_text(&self, header: Option<&str>, footer: Option<&str>) -> Result<String> {
        let length = self.secret.as_ref().map_or(WORD_LENGTH, Word::len);
        let remaining = self.remaining_tries();
        let mut lines = Vec::new();

        if let Some(header) = header {
            lines.push(format!("{header}\n"));
        }

        if self.state != SessionState::Ended {
            let hint = difficulty_hint(
                self.secret
                    .as_ref()
                    .map_or(crate::core::DEFAULT_DIFFICULTY, Word::difficulty),
            );
            lines.push(
                self.language
                    .message(MessageKey::GameAnswerThisToPlay, &[&hint])?,
            );
            lines.push(self.language.message(MessageKey::GameTries, &[&remaining])?);
            lines.push(String::new());
        }

        lines.extend(self.tries.iter().map(Feedback::to_emoji));
        lines.extend(std::iter::repeat_n(EMPTY_SLOT.repeat(length), remaining));

        if let Some(footer) = footer {
            lines.push(format!("\n{footer}"));
        }

        Ok(lines.join("\n"))
    }

    /// Edit the progress message in place, sending it the first time
    async fn render_progress(
        &mut self,
        header: Option<&str>,
        footer: Option<&str>,
        messenger: &dyn Messenger,
    ) -> Result<()> {
        let text = self.progress_text(header, footer)?;

        match self.progress {
            Some(message) => {
                messenger
                    .edit_message_text(self.chat, message, &text, None)
                    .await
            }
            None => {
                self.progress = Some(messenger.send_message(self.chat, &text, None).await?);
                Ok(())
            }
        }
    }

    #[must_use]
    pub const fn chat(&self) -> ChatId {
        self.chat
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    #[must_use]
    pub fn tries(&self) -> &[Feedback] {
        &self.tries
    }

    /// Messages accepted as guesses and not yet deleted
    #[must_use]
    pub fn replies(&self) -> &[MessageRef] {
        &self.replies
    }

    #[must_use]
    pub const fn progress_message(&self) -> Option<MessageRef> {
        self.progress
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        self.max_tries.saturating_sub(self.tries.len())
    }

    /// Whether `message` is the progress message players reply to
    #[must_use]
    pub fn is_for_message(&self, message: MessageRef) -> bool {
        self.progress == Some(message)
    }

    #[must_use]
    pub fn is_out_of_tries(&self) -> bool {
        self.tries.len() >= self.max_tries
    }

    /// Won, or out of tries
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Ended
            || (self.state == SessionState::InProgress && self.is_out_of_tries())
    }
}

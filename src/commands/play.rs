//! Console chat mode
//!
//! Each input line becomes a chat event:
//! - `/start`, `/help`, `/settings` are commands
//! - `@settings/language` presses the button with that action on the last menu
//! - anything else is a reply to the game message

use crate::bot::{Bot, ChatEvent};
use crate::frontend::{CallbackRef, ChatId, ConsoleMessenger, MessageRef};
use crate::output::print_play_banner;
use crate::settings::SettingsStore;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

/// The single chat played from the console
pub const CONSOLE_CHAT: ChatId = ChatId(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Empty,
    Quit,
    Event(ChatEvent),
}

/// Turn a console line into a chat event
///
/// `message` is the reference given to the line itself; `progress` and
/// `menu` are the messages replies and button presses target.
#[must_use]
pub fn parse_line(
    line: &str,
    message: MessageRef,
    progress: Option<MessageRef>,
    menu: Option<MessageRef>,
    author: &str,
) -> ConsoleInput {
    let line = line.trim();

    if line.is_empty() {
        return ConsoleInput::Empty;
    }
    if matches!(line, "/quit" | "/exit") {
        return ConsoleInput::Quit;
    }

    if let Some(action) = line.strip_prefix('@') {
        return ConsoleInput::Event(ChatEvent::Callback {
            chat: CONSOLE_CHAT,
            message: menu,
            callback: CallbackRef(format!("console-{}", message.0)),
            data: action.to_string(),
        });
    }

    ConsoleInput::Event(ChatEvent::Message {
        chat: CONSOLE_CHAT,
        message,
        author: author.to_string(),
        text: line.to_string(),
        reply_to: if line.starts_with('/') { None } else { progress },
    })
}

/// Play in the terminal until stdin closes or `/quit`
///
/// # Errors
/// Returns an error if stdin can't be read. Errors while handling an event
/// are printed and the loop goes on.
pub async fn run_play<S: SettingsStore>(
    mut bot: Bot<ConsoleMessenger, S>,
    author: &str,
) -> anyhow::Result<()> {
    print_play_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = parse_line(
            &line,
            bot.messenger().allocate_ref(),
            bot.progress_message(CONSOLE_CHAT),
            bot.messenger().last_keyboard_message(),
            author,
        );

        match input {
            ConsoleInput::Empty => {}
            ConsoleInput::Quit => break,
            ConsoleInput::Event(event) => {
                if let Err(e) = bot.handle(event).await {
                    error!("failed to handle input: {e}");
                    println!("{}", format!("✗ {e}").red());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_become_events() {
        let progress = Some(MessageRef(2));
        let menu = Some(MessageRef(3));

        assert_eq!(
            parse_line("   ", MessageRef(9), progress, menu, "me"),
            ConsoleInput::Empty
        );
        assert_eq!(
            parse_line("/quit", MessageRef(9), progress, menu, "me"),
            ConsoleInput::Quit
        );

        let ConsoleInput::Event(ChatEvent::Message { reply_to, text, .. }) =
            parse_line(" amigo ", MessageRef(9), progress, menu, "me")
        else {
            panic!("expected a message");
        };
        assert_eq!(text, "amigo");
        assert_eq!(reply_to, progress);

        let ConsoleInput::Event(ChatEvent::Message { reply_to, .. }) =
            parse_line("/start", MessageRef(9), progress, menu, "me")
        else {
            panic!("expected a message");
        };
        assert_eq!(reply_to, None);
    }

    #[test]
    fn at_sign_presses_a_button() {
        let input = parse_line("@settings/language", MessageRef(9), None, Some(MessageRef(3)), "me");

        assert_eq!(
            input,
            ConsoleInput::Event(ChatEvent::Callback {
                chat: CONSOLE_CHAT,
                message: Some(MessageRef(3)),
                callback: CallbackRef("console-9".into()),
                data: "settings/language".into(),
            })
        );
    }
}

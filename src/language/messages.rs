//! Localized message templates
//!
//! Templates are plain strings or arrays of lines (joined with `\n`) and use
//! printf-style positional substitution: `%s`/`%d` consume the next argument,
//! `%2$s` picks an explicit one, `%%` is a literal percent sign.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Every message key the bot renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Help,
    Settings,
    SettingsButtonNotifyDailyWord,
    SettingsButtonLanguage,
    SettingsSelectChooseOption,
    GameStart,
    GameWin,
    GameTries,
    GameAnswerThisToPlay,
    GameErrorLengthNotEqual,
    GameErrorWordNotPresent,
    GameErrorAlreadyRunning,
}

impl MessageKey {
    /// Key as written in language files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Settings => "settings",
            Self::SettingsButtonNotifyDailyWord => "settings.button.notify_daily_word",
            Self::SettingsButtonLanguage => "settings.button.language",
            Self::SettingsSelectChooseOption => "settings.select.choose_option",
            Self::GameStart => "game.start",
            Self::GameWin => "game.win",
            Self::GameTries => "game.tries",
            Self::GameAnswerThisToPlay => "game.answer_this_to_play",
            Self::GameErrorLengthNotEqual => "game.error.length_not_equal",
            Self::GameErrorWordNotPresent => "game.error.word_not_present",
            Self::GameErrorAlreadyRunning => "game.error.already_running",
        }
    }

    pub const ALL: [Self; 12] = [
        Self::Help,
        Self::Settings,
        Self::SettingsButtonNotifyDailyWord,
        Self::SettingsButtonLanguage,
        Self::SettingsSelectChooseOption,
        Self::GameStart,
        Self::GameWin,
        Self::GameTries,
        Self::GameAnswerThisToPlay,
        Self::GameErrorLengthNotEqual,
        Self::GameErrorWordNotPresent,
        Self::GameErrorAlreadyRunning,
    ];
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A template as stored in language files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Line(String),
    Lines(Vec<String>),
}

impl MessageText {
    fn template(&self) -> String {
        match self {
            Self::Line(line) => line.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Message templates of one language
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Messages(HashMap<String, MessageText>);

impl Messages {
    #[must_use]
    pub fn new(templates: HashMap<String, MessageText>) -> Self {
        Self(templates)
    }

    #[must_use]
    pub fn contains(&self, key: MessageKey) -> bool {
        self.0.contains_key(key.as_str())
    }

    /// Keys the bot renders that this language does not define
    #[must_use]
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| !self.contains(*key))
            .collect()
    }

    /// Resolve `key` and substitute `args`
    ///
    /// # Errors
    /// Returns [`Error::MissingKey`] when the key is not defined and
    /// [`Error::MissingArgument`] when the template needs more arguments.
    pub fn format(&self, key: MessageKey, args: &[&dyn fmt::Display]) -> Result<String> {
        let text = self
            .0
            .get(key.as_str())
            .ok_or_else(|| Error::MissingKey(key.as_str().to_string()))?;

        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        substitute(key.as_str(), &text.template(), &args)
    }
}

/// Apply printf-style positional substitution to a template
fn substitute(key: &str, template: &str, args: &[String]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        if let Some(after) = rest.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        // Optional explicit position: %2$s
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (position, after) = if digits > 0 && rest[digits..].starts_with('$') {
            let position = rest[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1));
            (position, &rest[digits + 1..])
        } else {
            (None, rest)
        };

        let Some(conversion) = after.chars().next().filter(|c| matches!(c, 's' | 'd' | 'i'))
        else {
            // Not a conversion, keep the percent sign as written
            out.push('%');
            continue;
        };

        let index = position.unwrap_or_else(|| {
            let index = next;
            next += 1;
            index
        });

        let value = args.get(index).ok_or_else(|| Error::MissingArgument {
            key: key.to_string(),
            index: index + 1,
        })?;

        out.push_str(value);
        rest = &after[conversion.len_utf8()..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(json: &str) -> Messages {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn format_sequential_arguments() {
        let m = messages(r#"{"game.win": "%s guessed <b>%s</b>!"}"#);
        let text = m.format(MessageKey::GameWin, &[&"ana", &"Amigo"]).unwrap();
        assert_eq!(text, "ana guessed <b>Amigo</b>!");
    }

    #[test]
    fn format_numeric_argument() {
        let m = messages(r#"{"game.tries": "Tries left: %d"}"#);
        assert_eq!(m.format(MessageKey::GameTries, &[&4]).unwrap(), "Tries left: 4");
    }

    #[test]
    fn format_positional_arguments() {
        let m = messages(r#"{"game.win": "%2$s by %1$s"}"#);
        let text = m.format(MessageKey::GameWin, &[&"ana", &"amigo"]).unwrap();
        assert_eq!(text, "amigo by ana");
    }

    #[test]
    fn format_joins_line_arrays() {
        let m = messages(r#"{"help": ["line one", "line two", "100%%"]}"#);
        assert_eq!(
            m.format(MessageKey::Help, &[]).unwrap(),
            "line one\nline two\n100%"
        );
    }

    #[test]
    fn format_keeps_stray_percent() {
        let m = messages(r#"{"help": "50% off"}"#);
        assert_eq!(m.format(MessageKey::Help, &[]).unwrap(), "50% off");
    }

    #[test]
    fn format_missing_key() {
        let m = messages("{}");
        assert!(matches!(
            m.format(MessageKey::Help, &[]),
            Err(Error::MissingKey(key)) if key == "help"
        ));
    }

    #[test]
    fn format_missing_argument() {
        let m = messages(r#"{"game.win": "%s %s"}"#);
        assert!(matches!(
            m.format(MessageKey::GameWin, &[&"ana"]),
            Err(Error::MissingArgument { index: 2, .. })
        ));
    }

    #[test]
    fn missing_keys_lists_undefined_messages() {
        let m = messages(r#"{"help": "h"}"#);
        let missing = m.missing_keys();
        assert_eq!(missing.len(), MessageKey::ALL.len() - 1);
        assert!(!missing.contains(&MessageKey::Help));
    }
}

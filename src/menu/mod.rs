//! Interactive menu engine
//!
//! A [`Menu`] is a static declaration of typed options. Rendered against the
//! context of one interaction it becomes a [`MenuInstance`], which produces a
//! message with one inline button per option. The [`ActionRouter`] compiles
//! every declared menu into a routing table of action identifiers:
//!
//! - `namespace/` re-renders the menu
//! - `namespace/option` runs the option behavior
//! - `namespace/option/value` picks a value of a select option

mod declaration;
mod instance;
mod option;
mod router;

pub use declaration::Menu;
pub use instance::{MenuContext, MenuInstance};
pub use option::{ChatSettingAccessor, Choice, MenuOption, OptionAccessor, OptionKind};
pub use router::{ActionRouter, Dispatch};

use crate::error::Result;
use crate::language::{Language, MessageKey};

/// Largest action identifier a front end accepts, in bytes
pub const MAX_ACTION_ID_LEN: usize = 64;

/// Text that is either written literally or looked up per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Literal(String),
    Key(MessageKey),
}

impl Label {
    /// Text of the label in `language`
    ///
    /// # Errors
    /// Returns an error if a symbolic key can't be formatted.
    pub fn resolve(&self, language: &Language) -> Result<String> {
        match self {
            Self::Literal(text) => Ok(text.clone()),
            Self::Key(key) => language.message(*key, &[]),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<MessageKey> for Label {
    fn from(key: MessageKey) -> Self {
        Self::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::fixtures;

    #[test]
    fn labels_resolve_per_language() {
        let language = fixtures::english();

        assert_eq!(Label::from("Plain").resolve(&language).unwrap(), "Plain");
        assert_eq!(
            Label::from(MessageKey::SettingsButtonLanguage)
                .resolve(&language)
                .unwrap(),
            "Language"
        );
    }
}

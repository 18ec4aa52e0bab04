//! Per-chat settings menu: language and daily word notification

use crate::language::{LanguageRegistry, MessageKey};
use crate::menu::{ChatSettingAccessor, Choice, Menu, MenuOption};
use crate::settings::ChatSetting;

pub const SETTINGS_MENU_ID: &str = "settings";

/// Per-chat settings: daily word notifications and language
///
/// Language candidates are every loaded language, shown by name.
#[must_use]
pub fn settings_menu(languages: &LanguageRegistry) -> Menu {
    let choices = languages
        .languages()
        .iter()
        .map(|language| Choice::new(language.name(), language.code()))
        .collect();

    Menu::new(SETTINGS_MENU_ID, MessageKey::Settings)
        .option(MenuOption::toggle(
            "notify_daily_word",
            MessageKey::SettingsButtonNotifyDailyWord,
            ChatSettingAccessor::shared(ChatSetting::NotifyDailyWord),
        ))
        .option(MenuOption::select(
            "language",
            MessageKey::SettingsButtonLanguage,
            choices,
            ChatSettingAccessor::shared(ChatSetting::LanguageId),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::fixtures;
    use crate::menu::OptionKind;

    #[test]
    fn language_choices_follow_the_registry() {
        let registry = LanguageRegistry::new(fixtures::portuguese(), [fixtures::english()]);
        let menu = settings_menu(&registry);

        assert_eq!(menu.root_action(), "settings/");
        let OptionKind::Select { choices, .. } = &menu.find("language").unwrap().kind else {
            panic!("language is a select");
        };
        assert_eq!(
            choices,
            &[Choice::new("English", "en_US"), Choice::new("Português", "pt_BR")]
        );
    }
}

//! Menu declarations and action id normalization

use super::{Label, MenuContext, MenuInstance, MenuOption};

/// Static menu declaration, built once per process
#[derive(Debug)]
pub struct Menu {
    id: String,
    title: Label,
    options: Vec<MenuOption>,
}

impl Menu {
    pub fn new(id: impl Into<String>, title: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            options: Vec::new(),
        }
    }

    /// Append an option
    #[must_use]
    pub fn option(mut self, option: MenuOption) -> Self {
        self.options.push(option);
        self
    }

    /// Namespace of every action of this menu
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn title(&self) -> &Label {
        &self.title
    }

    #[must_use]
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    #[must_use]
    pub fn find(&self, option_id: &str) -> Option<&MenuOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Compose an action identifier inside this menu's namespace
    ///
    /// # Examples
    /// ```
    /// use wordin::menu::Menu;
    ///
    /// let menu = Menu::new("settings", "Settings");
    /// assert_eq!(menu.normalize_id(&[]), "settings/");
    /// assert_eq!(menu.normalize_id(&["language", "en_US"]), "settings/language/en_US");
    /// ```
    #[must_use]
    pub fn normalize_id(&self, parts: &[&str]) -> String {
        format!("{}/{}", self.id, parts.join("/"))
    }

    /// Action that re-renders the menu itself
    #[must_use]
    pub fn root_action(&self) -> String {
        self.normalize_id(&[])
    }

    /// Bind the declaration to the context of one interaction
    #[must_use]
    pub fn instance<'a>(&'a self, context: MenuContext<'a>) -> MenuInstance<'a> {
        MenuInstance::new(self, context)
    }
}

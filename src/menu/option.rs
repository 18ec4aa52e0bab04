//! Menu option kinds and their value accessors

use super::{Label, MenuInstance};
use crate::error::Result;
use crate::settings::{ChatSetting, SettingValue};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Reads and writes the value behind an option
#[async_trait]
pub trait OptionAccessor: Send + Sync {
    async fn get(&self, menu: &MenuInstance<'_>) -> Result<SettingValue>;

    async fn set(&self, value: SettingValue, menu: &MenuInstance<'_>) -> Result<()>;
}

/// Accessor bound to a setting of the chat the menu is shown in
#[derive(Debug, Clone, Copy)]
pub struct ChatSettingAccessor(pub ChatSetting);

impl ChatSettingAccessor {
    #[must_use]
    pub fn shared(setting: ChatSetting) -> Arc<dyn OptionAccessor> {
        Arc::new(Self(setting))
    }
}

#[async_trait]
impl OptionAccessor for ChatSettingAccessor {
    async fn get(&self, menu: &MenuInstance<'_>) -> Result<SettingValue> {
        let context = menu.context();
        context
            .settings
            .get_chat_setting(context.record.id, self.0)
            .await
    }

    async fn set(&self, value: SettingValue, menu: &MenuInstance<'_>) -> Result<()> {
        let context = menu.context();
        context
            .settings
            .set_chat_setting(context.record.id, self.0, value)
            .await
    }
}

/// One candidate of a select option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub enum OptionKind {
    /// Boolean flipped on every press
    Toggle(Arc<dyn OptionAccessor>),
    Text(Arc<dyn OptionAccessor>),
    Number(Arc<dyn OptionAccessor>),
    /// One value out of a fixed list, picked from a sub-view
    Select {
        choices: Vec<Choice>,
        accessor: Arc<dyn OptionAccessor>,
    },
    Submenu,
    Back,
}

impl OptionKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Select { .. } => "select",
            Self::Submenu => "submenu",
            Self::Back => "back",
        }
    }
}

impl fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select { choices, .. } => {
                f.debug_struct("Select").field("choices", choices).finish()
            }
            kind => f.write_str(kind.name()),
        }
    }
}

#[derive(Debug)]
pub struct MenuOption {
    pub id: String,
    pub label: Label,
    pub kind: OptionKind,
}

impl MenuOption {
    pub fn new(id: impl Into<String>, label: impl Into<Label>, kind: OptionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn toggle(
        id: impl Into<String>,
        label: impl Into<Label>,
        accessor: Arc<dyn OptionAccessor>,
    ) -> Self {
        Self::new(id, label, OptionKind::Toggle(accessor))
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<Label>,
        choices: Vec<Choice>,
        accessor: Arc<dyn OptionAccessor>,
    ) -> Self {
        Self::new(id, label, OptionKind::Select { choices, accessor })
    }

    pub fn text(
        id: impl Into<String>,
        label: impl Into<Label>,
        accessor: Arc<dyn OptionAccessor>,
    ) -> Self {
        Self::new(id, label, OptionKind::Text(accessor))
    }

    pub fn number(
        id: impl Into<String>,
        label: impl Into<Label>,
        accessor: Arc<dyn OptionAccessor>,
    ) -> Self {
        Self::new(id, label, OptionKind::Number(accessor))
    }

    pub fn submenu(id: impl Into<String>, label: impl Into<Label>) -> Self {
        Self::new(id, label, OptionKind::Submenu)
    }

    pub fn back(id: impl Into<String>, label: impl Into<Label>) -> Self {
        Self::new(id, label, OptionKind::Back)
    }
}

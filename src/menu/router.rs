//! Routing of callback actions to menu options

use super::{MAX_ACTION_ID_LEN, Menu, MenuContext, MenuInstance, OptionKind};
use crate::error::Result;
use crate::frontend::CallbackRef;
use crate::settings::SettingValue;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Root,
    Option(usize),
}

#[derive(Debug, Clone)]
struct Route {
    menu: Arc<Menu>,
    target: Target,
}

/// What happened to a dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// No menu listens for the action; the callback was still answered
    Unrouted,
}

/// Routing table compiled from menu declarations
#[derive(Debug, Default)]
pub struct ActionRouter {
    exact: FxHashMap<String, Route>,
    values: Vec<(Regex, Route)>,
}

impl ActionRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the actions of `menu` into the table
    ///
    /// Options whose identifier exceeds [`MAX_ACTION_ID_LEN`] bytes are
    /// skipped with a warning; they are still rendered. Returns the number
    /// of routes added.
    pub fn register(&mut self, menu: Arc<Menu>) -> usize {
        info!("menu \"{}\" is now listening for actions", menu.id());
        let mut added = 0;

        let root = menu.root_action();
        if fits(&root) {
            self.exact.insert(
                root,
                Route {
                    menu: Arc::clone(&menu),
                    target: Target::Root,
                },
            );
            added += 1;
        }

        for (index, option) in menu.options().iter().enumerate() {
            let action = menu.normalize_id(&[&option.id]);
            if !fits(&action) {
                continue;
            }

            let route = Route {
                menu: Arc::clone(&menu),
                target: Target::Option(index),
            };

            if let OptionKind::Select { choices, .. } = &option.kind {
                for choice in choices {
                    let value_action = menu.normalize_id(&[&option.id, &choice.value]);
                    if value_action.len() > MAX_ACTION_ID_LEN {
                        warn!("select value action {value_action} is longer than {MAX_ACTION_ID_LEN} bytes");
                    }
                }

                match Regex::new(&format!("^{}/(.+)$", regex::escape(&action))) {
                    Ok(pattern) => {
                        self.values.push((pattern, route.clone()));
                        added += 1;
                    }
                    Err(e) => warn!("select {action} can't receive values: {e}"),
                }
            }

            debug!("registered action {action}");
            self.exact.insert(action, route);
            added += 1;
        }

        added
    }

    /// Whether `action` reaches a menu
    #[must_use]
    pub fn is_registered(&self, action: &str) -> bool {
        self.resolve(action).is_some()
    }

    fn resolve(&self, action: &str) -> Option<(&Route, Option<String>)> {
        if let Some(route) = self.exact.get(action) {
            return Some((route, None));
        }

        self.values.iter().find_map(|(pattern, route)| {
            pattern
                .captures(action)
                .and_then(|captures| captures.get(1))
                .map(|value| (route, Some(value.as_str().to_string())))
        })
    }

    /// Run the behavior behind `action` and acknowledge `callback`
    ///
    /// The callback is answered on every path, including unknown actions and
    /// failing option behavior.
    ///
    /// # Errors
    /// Returns the error of the option behavior, after acknowledging.
    pub async fn dispatch(
        &self,
        action: &str,
        callback: &CallbackRef,
        context: MenuContext<'_>,
    ) -> Result<Dispatch> {
        let messenger = context.messenger;

        let outcome = match self.resolve(action) {
            Some((route, value)) => {
                debug!("received callback action {action}");
                let instance = route.menu.instance(context);
                run(&instance, route.target, value).await.map(|()| Dispatch::Handled)
            }
            None => {
                debug!("no menu listens for action {action}");
                Ok(Dispatch::Unrouted)
            }
        };

        if let Err(e) = messenger.answer_callback(callback).await {
            warn!("failed to answer callback for {action}: {e}");
        }

        outcome
    }
}

fn fits(action: &str) -> bool {
    if action.len() > MAX_ACTION_ID_LEN {
        warn!("action {action} was not registered because it is longer than {MAX_ACTION_ID_LEN} bytes");
        return false;
    }
    true
}

async fn run(instance: &MenuInstance<'_>, target: Target, value: Option<String>) -> Result<()> {
    let Target::Option(index) = target else {
        instance.answer(true).await?;
        return Ok(());
    };

    let Some(option) = instance.menu().options().get(index) else {
        instance.answer(true).await?;
        return Ok(());
    };

    match (&option.kind, value) {
        (OptionKind::Toggle(accessor), _) => {
            let current = accessor.get(instance).await?.as_bool().unwrap_or(false);
            accessor.set(SettingValue::Bool(!current), instance).await?;
            info!(
                "update option \"{}\" for chat {}, new value is {}",
                option.id,
                instance.context().record.id,
                !current
            );
        }
        (OptionKind::Select { .. }, None) => {
            instance.answer_select(option).await?;
            return Ok(());
        }
        (OptionKind::Select { accessor, .. }, Some(value)) => {
            info!(
                "update option \"{}\" for chat {}, new value is {value}",
                option.id,
                instance.context().record.id
            );
            accessor.set(SettingValue::Text(value), instance).await?;
        }
        (kind, _) => debug!("option \"{}\" is a {}, nothing to update", option.id, kind.name()),
    }

    instance.answer(true).await?;
    Ok(())
}

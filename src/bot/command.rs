//! Slash command parsing

/// A `/name[@bot] args...` chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Command<'a> {
    /// Parse a command, ignoring the bot mention
    ///
    /// # Examples
    /// ```
    /// use wordin::bot::Command;
    ///
    /// let command = Command::parse("/start@wordin_bot now").unwrap();
    /// assert_eq!(command.name, "start");
    /// assert_eq!(command.args, ["now"]);
    /// assert!(Command::parse("amigo").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next()?.split('@').next()?;

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name,
            args: parts.collect(),
        })
    }
}

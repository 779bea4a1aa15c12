//! Command entity - an entry in the bot's command catalog

/// Bot command catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub usage: String,
    pub enabled: bool,
}

/// Insert payload for a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommand {
    pub name: String,
    pub category: String,
    pub description: String,
    pub usage: String,
    /// Defaults to enabled
    pub enabled: Option<bool>,
}

impl NewCommand {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            usage: usage.into(),
            enabled: None,
        }
    }

    pub fn into_command(self, id: i32) -> Command {
        Command {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            usage: self.usage,
            enabled: self.enabled.unwrap_or(true),
        }
    }
}

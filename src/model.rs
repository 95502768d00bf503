use serde::{Deserialize, Serialize};

/// Top-level description of an application, as read from the JSON input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppDefinition {
    /// The literal command users type (used for `#compdef` and the entry point).
    pub name: String,
    /// Display name used to derive the function namespace. Defaults to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub commands: CommandCollection,
}

impl AppDefinition {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Ordered set of sibling commands. The primary command, if any, is the one
/// invoked when no sub-command name is given.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandCollection {
    pub all: Vec<CommandDescriptor>,
}

impl CommandCollection {
    pub fn primary(&self) -> Option<&CommandDescriptor> {
        self.all.iter().find(|c| c.primary)
    }

    /// Siblings shown as completable sub-commands: not hidden, and not the
    /// primary command (that one is invoked positionally, not by name).
    pub fn visible_sub_commands(&self) -> Vec<&CommandDescriptor> {
        self.all
            .iter()
            .filter(|c| !c.hidden && !c.primary)
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub sub_commands: Option<CommandCollection>,
    #[serde(default)]
    pub options: Vec<CommandOptionDescriptor>,
    #[serde(default)]
    pub arguments: Vec<CommandArgumentDescriptor>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandOptionDescriptor {
    /// Long form, without the leading dashes.
    pub name: String,
    /// Single-character aliases, without the leading dash.
    #[serde(default)]
    pub short: Vec<char>,
    #[serde(default)]
    pub description: String,
    /// false = boolean flag, true = the option takes a value.
    #[serde(default)]
    pub takes_value: bool,
    /// The option may be repeated / accepts multiple values.
    #[serde(default)]
    pub repeatable: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub completion: Candidates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandArgumentDescriptor {
    pub name: String,
    /// 1-based position among the command's positional arguments.
    pub order: u32,
    #[serde(default)]
    pub completion: Candidates,
}

/// Where completion candidates for an option or argument come from.
///
/// `OnTheFly` means they cannot be known statically and the generated script
/// must re-invoke the executable at completion time. Everything else maps to
/// a static zsh action. Unrecognized kinds degrade to plain file completion
/// rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidates {
    OnTheFly,
    Default,
    File,
    Directory,
    Keywords { values: Vec<CandidateValue> },
    #[serde(other)]
    Unknown,
}

impl Default for Candidates {
    fn default() -> Self {
        Candidates::Default
    }
}

/// One resolved completion candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateValue {
    pub value: String,
    #[serde(default)]
    pub description: String,
}

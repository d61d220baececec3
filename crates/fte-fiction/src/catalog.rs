//! The table of verbs the player can type.

use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use crate::error::FictionError;

/// Every action the engine knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Leave the game.
    Exit,
    /// Show the command and argument tables.
    Help,
    /// Talk to a character here.
    Talk,
    /// Travel to a location.
    Go,
    /// Describe a location or a character.
    Info,
}

impl Verb {
    /// All verbs in help-table order.
    pub const ALL: [Verb; 5] = [Verb::Exit, Verb::Help, Verb::Talk, Verb::Go, Verb::Info];

    /// The keyword that invokes this verb in the standard catalog.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Help => "help",
            Self::Talk => "talk",
            Self::Go => "go",
            Self::Info => "info",
        }
    }
}

impl FromStr for Verb {
    type Err = FictionError;

    /// Exact, case-sensitive match on the standard keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.keyword() == s)
            .ok_or_else(|| FictionError::UnknownCommand(s.to_string()))
    }
}

/// Catalog entry: what a keyword does and how to use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Word the player types.
    pub keyword: String,
    /// Verb dispatched when the keyword is typed.
    pub verb: Verb,
    /// Full explanation shown in help.
    pub description: String,
    usage: Option<String>,
}

impl CommandSpec {
    /// Create an entry invoked by `keyword`.
    pub fn new(keyword: impl Into<String>, verb: Verb, description: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            verb,
            description: description.into(),
            usage: None,
        }
    }

    /// Set the argument pattern, e.g. `<location name>`.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Example usage: the keyword followed by its argument pattern, if any.
    pub fn usage(&self) -> String {
        match &self.usage {
            Some(pattern) if !pattern.is_empty() => format!("{} {pattern}", self.keyword),
            _ => self.keyword.clone(),
        }
    }
}

/// Which help tables to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    /// Only the commands table.
    Commands,
    /// Only the argument notation table.
    Arguments,
    /// Both tables.
    All,
}

impl HelpTopic {
    /// Pick the topic from the `help` argument. Anything unrecognized means all.
    pub fn parse(argument: Option<&str>) -> Self {
        match argument {
            Some("commands") => Self::Commands,
            Some("arguments") => Self::Arguments,
            _ => Self::All,
        }
    }

    /// Whether the commands table is shown.
    pub fn shows_commands(self) -> bool {
        matches!(self, Self::Commands | Self::All)
    }

    /// Whether the argument notation table is shown.
    pub fn shows_arguments(self) -> bool {
        matches!(self, Self::Arguments | Self::All)
    }
}

/// Rows of the argument notation table.
pub const ARGUMENT_NOTATION: [(&str, &str); 3] = [
    ("< ... >", "Required argument."),
    ("( ... )", "Optional argument."),
    ("( a | b )", "Optional argument, but only \"a\" or \"b\"."),
];

static STANDARD: LazyLock<Arc<CommandCatalog>> =
    LazyLock::new(|| Arc::new(CommandCatalog::standard()));

/// Read-only mapping from keywords to commands.
///
/// Entries keep insertion order, which is the order help lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: Vec<CommandSpec>,
}

impl CommandCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game's commands: `exit`, `help`, `talk`, `go`, `info`.
    pub fn standard() -> Self {
        Self::new()
            .with_command(CommandSpec::new("exit", Verb::Exit, "Exits the game."))
            .with_command(
                CommandSpec::new(
                    "help",
                    Verb::Help,
                    "Shows help. Optionally only \"commands\" or \"arguments\".",
                )
                .with_usage("(\"commands\" | \"arguments\")"),
            )
            .with_command(
                CommandSpec::new(
                    "talk",
                    Verb::Talk,
                    "Talk to someone. \
                     Pass character name to start conversation with them. \
                     You can talk only to characters in your location.",
                )
                .with_usage("<character name>"),
            )
            .with_command(
                CommandSpec::new(
                    "go",
                    Verb::Go,
                    "Go somewhere. Pass location name to go there.",
                )
                .with_usage("<location name>"),
            )
            .with_command(
                CommandSpec::new(
                    "info",
                    Verb::Info,
                    "Get information about a character or a location. \
                     Do not pass anything to show info about current location.",
                )
                .with_usage("(character name | location name)"),
            )
    }

    /// The standard catalog, built once per process and shared.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Add an entry, replacing any entry with the same keyword.
    pub fn with_command(mut self, command: CommandSpec) -> Self {
        match self
            .commands
            .iter_mut()
            .find(|c| c.keyword == command.keyword)
        {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
        self
    }

    /// Look up a keyword exactly as typed.
    pub fn lookup(&self, keyword: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.keyword == keyword)
    }

    /// All entries in help order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_order() {
        let catalog = CommandCatalog::standard();
        let keywords: Vec<_> = catalog.iter().map(|c| c.keyword.as_str()).collect();
        assert_eq!(keywords, ["exit", "help", "talk", "go", "info"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = CommandCatalog::standard();
        assert_eq!(catalog.lookup("go").map(|c| c.verb), Some(Verb::Go));
        assert!(catalog.lookup("Go").is_none());
        assert!(catalog.lookup("dance").is_none());
    }

    #[test]
    fn usage_defaults_to_keyword() {
        let catalog = CommandCatalog::standard();
        assert_eq!(catalog.lookup("exit").unwrap().usage(), "exit");
        assert_eq!(catalog.lookup("go").unwrap().usage(), "go <location name>");
        assert_eq!(
            catalog.lookup("help").unwrap().usage(),
            "help (\"commands\" | \"arguments\")"
        );
    }

    #[test]
    fn verb_from_str() {
        assert_eq!("talk".parse::<Verb>().unwrap(), Verb::Talk);
        let err = "TALK".parse::<Verb>().unwrap_err();
        assert!(matches!(err, FictionError::UnknownCommand(v) if v == "TALK"));
    }

    #[test]
    fn standard_keywords_match_verbs() {
        for command in CommandCatalog::standard().iter() {
            assert_eq!(command.verb.keyword(), command.keyword);
        }
    }

    #[test]
    fn with_command_replaces_same_keyword() {
        let catalog = CommandCatalog::standard()
            .with_command(CommandSpec::new("go", Verb::Go, "Walk."))
            .with_command(CommandSpec::new("walk", Verb::Go, "Walk somewhere."));
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.lookup("go").unwrap().description, "Walk.");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn shared_catalog_is_standard() {
        assert_eq!(*CommandCatalog::shared(), CommandCatalog::standard());
    }

    #[test]
    fn help_topics() {
        assert_eq!(HelpTopic::parse(Some("commands")), HelpTopic::Commands);
        assert_eq!(HelpTopic::parse(Some("arguments")), HelpTopic::Arguments);
        assert_eq!(HelpTopic::parse(Some("everything")), HelpTopic::All);
        assert_eq!(HelpTopic::parse(None), HelpTopic::All);
        assert!(HelpTopic::All.shows_commands() && HelpTopic::All.shows_arguments());
        assert!(!HelpTopic::Commands.shows_arguments());
    }
}

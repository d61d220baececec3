//! Command parsing for player input.

use crate::catalog::{CommandCatalog, Verb};
use crate::error::{FictionError, FictionResult};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The verb the keyword mapped to.
    pub verb: Verb,
    /// Everything after the first space, if anything.
    pub argument: Option<String>,
}

/// Split a line at its first space into keyword and argument.
///
/// The argument keeps any further spaces verbatim. An empty remainder
/// (`"talk "`) counts as no argument.
pub fn split_command(input: &str) -> (&str, Option<&str>) {
    match input.split_once(' ') {
        Some((keyword, argument)) => (keyword, Some(argument).filter(|a| !a.is_empty())),
        None => (input, None),
    }
}

/// Parse a line against `catalog`.
///
/// Fails with [`FictionError::UnknownCommand`] carrying the keyword when the
/// catalog has no such entry.
pub fn parse_command(catalog: &CommandCatalog, input: &str) -> FictionResult<Command> {
    let (keyword, argument) = split_command(input);
    let spec = catalog
        .lookup(keyword)
        .ok_or_else(|| FictionError::UnknownCommand(keyword.to_string()))?;

    Ok(Command {
        verb: spec.verb,
        argument: argument.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CommandSpec;

    fn parse(input: &str) -> FictionResult<Command> {
        parse_command(&CommandCatalog::standard(), input)
    }

    #[test]
    fn bare_verb() {
        assert_eq!(
            parse("help").unwrap(),
            Command {
                verb: Verb::Help,
                argument: None
            }
        );
    }

    #[test]
    fn argument_keeps_inner_spaces() {
        assert_eq!(
            parse("go Engine Deck").unwrap(),
            Command {
                verb: Verb::Go,
                argument: Some("Engine Deck".to_string())
            }
        );
        assert_eq!(split_command("info  Rex"), ("info", Some(" Rex")));
    }

    #[test]
    fn trailing_space_is_no_argument() {
        assert_eq!(parse("talk ").unwrap().argument, None);
    }

    #[test]
    fn unknown_keyword() {
        let err = parse("dance wildly").unwrap_err();
        assert!(matches!(err, FictionError::UnknownCommand(k) if k == "dance"));
    }

    #[test]
    fn keyword_is_case_sensitive() {
        assert!(parse("GO Bridge").is_err());
    }

    #[test]
    fn leading_space_is_empty_keyword() {
        let err = parse(" go").unwrap_err();
        assert!(matches!(err, FictionError::UnknownCommand(k) if k.is_empty()));
    }

    #[test]
    fn alternate_catalog() {
        let catalog = CommandCatalog::new().with_command(CommandSpec::new(
            "walk",
            Verb::Go,
            "Walk somewhere.",
        ));
        let command = parse_command(&catalog, "walk Bridge").unwrap();
        assert_eq!(command.verb, Verb::Go);
        assert!(parse_command(&catalog, "go Bridge").is_err());
    }
}

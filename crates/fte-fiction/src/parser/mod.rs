//! Command line parsing and name suggestions.

mod command;
mod resolver;

pub use command::{Command, parse_command, split_command};
pub use resolver::{SUGGESTION_THRESHOLD, suggest_keyword};

//! Interactive fiction engine for Fix The Engines.
//!
//! A [`World`] owns the player's position and every character of a chapter.
//! Each call to [`World::interaction`] reads one command line from a
//! [`Console`], updates the world, prints the response, and hands back what
//! the player interacted with so the chapter script can branch on it.

/// The table of verbs the player can type.
pub mod catalog;
/// The terminal seam: line input and styled output.
pub mod console;
/// Error types for the fiction engine.
pub mod error;
/// Command line parsing and name suggestions.
pub mod parser;
/// Character speech and actions.
pub mod speech;
/// The world-interaction engine.
pub mod world;

pub use catalog::{CommandCatalog, CommandSpec, HelpTopic, Verb};
pub use console::{Console, Input, ScriptedConsole};
pub use error::{FictionError, FictionResult};
pub use parser::{Command, parse_command};
pub use world::{Interaction, Phase, World};

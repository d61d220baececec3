//! The world-interaction engine.
//!
//! A [`World`] is built once per chapter from a [`Roster`] and a starting
//! location. The chapter script then calls [`World::interaction`] repeatedly;
//! each call consumes exactly one command (or, on the very first call of a
//! first chapter, the onboarding question) and returns what the player
//! interacted with.

mod commands;
mod onboarding;

use std::sync::{Arc, LazyLock};

use colored::{ColoredString, Colorize};
use fte_core::{Character, CharacterId, Location, LocationId, Roster};
use tracing::{debug, trace};

use crate::catalog::{CommandCatalog, Verb};
use crate::console::{Console, Input};
use crate::error::{FictionError, FictionResult};
use crate::parser::{Command, parse_command, suggest_keyword};
use crate::speech;

/// Consecutive unknown commands after which the player is nudged to `help`.
pub const HINT_AFTER_FAILS: u32 = 3;

static UNKNOWN_LOCATION: LazyLock<Location> = LazyLock::new(Location::unknown_placeholder);

/// What a single [`World::interaction`] call resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The player talked to this character.
    Character(CharacterId),
    /// The player arrived at this location.
    Location(LocationId),
    /// Nothing the script needs to react to.
    Nothing,
    /// The player asked to leave the game.
    Exit,
}

impl Interaction {
    /// The location arrived at, if any.
    pub fn location(self) -> Option<LocationId> {
        match self {
            Self::Location(id) => Some(id),
            _ => None,
        }
    }

    /// The character talked to, if any.
    pub fn character(self) -> Option<CharacterId> {
        match self {
            Self::Character(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the call produced no result.
    pub fn is_nothing(self) -> bool {
        self == Self::Nothing
    }
}

/// Where a world is in its session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next interaction asks whether to enable the assistant.
    AwaitingOnboarding,
    /// Interactions dispatch commands.
    Ready,
}

/// The game environment: the player, locations, characters, and how they meet.
#[derive(Debug, Clone)]
pub struct World {
    roster: Roster,
    catalog: Arc<CommandCatalog>,
    location: LocationId,
    fails: u32,
    first_interaction: bool,
    assistant: bool,
}

impl World {
    /// Create a world with the player at `starting_location`.
    ///
    /// Onboarding and the assistant are off; the catalog is the shared
    /// standard one.
    pub fn new(roster: Roster, starting_location: LocationId) -> Self {
        Self {
            roster,
            catalog: CommandCatalog::shared(),
            location: starting_location,
            fails: 0,
            first_interaction: false,
            assistant: false,
        }
    }

    /// Ask about the assistant on the first interaction.
    pub fn with_first_interaction(mut self, first_interaction: bool) -> Self {
        self.first_interaction = first_interaction;
        self
    }

    /// Start with the assistant enabled or disabled.
    pub fn with_assistant(mut self, assistant: bool) -> Self {
        self.assistant = assistant;
        self
    }

    /// Use a different command catalog.
    pub fn with_catalog(mut self, catalog: Arc<CommandCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.first_interaction {
            Phase::AwaitingOnboarding
        } else {
            Phase::Ready
        }
    }

    /// Key of the player's current location.
    pub fn location_id(&self) -> LocationId {
        self.location
    }

    /// The player's current location, or a `"???"` placeholder if the key is
    /// not registered.
    pub fn location(&self) -> &Location {
        self.roster
            .location(self.location)
            .unwrap_or(&UNKNOWN_LOCATION)
    }

    /// Consecutive unknown commands since the last successful one.
    pub fn fails(&self) -> u32 {
        self.fails
    }

    /// Whether assistant text is shown.
    pub fn assistant_enabled(&self) -> bool {
        self.assistant
    }

    /// The command catalog in use.
    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Every location and character.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get a character by key.
    pub fn character(&self, id: CharacterId) -> FictionResult<&Character> {
        self.roster
            .character(id)
            .ok_or(FictionError::UnknownCharacter(id))
    }

    /// Edit a character's attributes, e.g. give it a new poke line.
    ///
    /// Move characters with [`World::character_enters`] and
    /// [`World::character_leaves`] instead of editing `location` here.
    pub fn character_mut(&mut self, id: CharacterId) -> FictionResult<&mut Character> {
        self.roster
            .character_mut(id)
            .ok_or(FictionError::UnknownCharacter(id))
    }

    /// Characters in the player's location, in registration order.
    pub fn characters_here(&self) -> Vec<(CharacterId, &Character)> {
        self.roster.characters_at(self.location).collect()
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Find a known location by name (case-insensitive).
    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.roster
            .find_location(name)
            .filter(|id| self.roster.location(*id).is_some_and(|l| l.known))
    }

    /// Find a character by name (case-insensitive), known or not.
    pub fn find_character(&self, name: &str) -> Option<CharacterId> {
        self.roster.find_character(name)
    }

    /// Whether a known character with this name exists anywhere.
    pub fn character_in_global(&self, name: &str) -> bool {
        self.known_character(name).is_some()
    }

    /// Whether a known character with this name is in the player's location.
    pub fn character_in_location(&self, name: &str) -> bool {
        self.known_character(name)
            .is_some_and(|c| c.location == self.location)
    }

    fn known_character(&self, name: &str) -> Option<&Character> {
        self.find_character(name)
            .and_then(|id| self.roster.character(id))
            .filter(|c| c.known)
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Move a character into the player's location.
    ///
    /// Does nothing if the character is already here. Unless `silently`, the
    /// character is seen walking in.
    pub fn character_enters<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        id: CharacterId,
        silently: bool,
    ) -> FictionResult<()> {
        let here = self.location;
        let character = self.character_mut(id)?;
        if character.location == here {
            return Ok(());
        }
        character.location = here;
        debug!(character = %character.name(), location = %here, "character enters");
        if !silently {
            speech::action(console, character, "Walks in.")?;
        }
        Ok(())
    }

    /// Move a character from the player's location to `goes_to`.
    ///
    /// Does nothing if the character is not here. Unless `silently`, the
    /// character is seen walking out.
    pub fn character_leaves<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        id: CharacterId,
        goes_to: LocationId,
        silently: bool,
    ) -> FictionResult<()> {
        if self.roster.location(goes_to).is_none() {
            return Err(FictionError::UnknownLocation(goes_to));
        }
        let here = self.location;
        let character = self.character_mut(id)?;
        if character.location != here {
            return Ok(());
        }
        character.location = goes_to;
        debug!(character = %character.name(), location = %goes_to, "character leaves");
        if !silently {
            speech::action(console, character, "Walks out.")?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// Show `text` only if the player enabled the assistant.
    pub fn assistant<C: Console + ?Sized>(
        &self,
        console: &mut C,
        text: &[ColoredString],
    ) -> FictionResult<()> {
        if self.assistant {
            console.print(text)?;
        }
        Ok(())
    }

    /// Read and carry out one player command.
    ///
    /// The first call of a world built with
    /// [`with_first_interaction`](World::with_first_interaction) runs the
    /// onboarding question instead and returns [`Interaction::Nothing`].
    /// Empty lines and interrupts prompt again. Closed input behaves like
    /// `exit`.
    pub fn interaction<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> FictionResult<Interaction> {
        if self.first_interaction {
            self.do_first_interaction(console)?;
            return Ok(Interaction::Nothing);
        }

        let query = loop {
            match console.read_line(&self.prefix())? {
                Input::Line(line) if !line.is_empty() => break line,
                Input::Line(_) => continue,
                Input::Interrupted => {
                    console.print(&[" Retry...".yellow().italic()])?;
                }
                Input::Closed => {
                    debug!("input closed");
                    return self.command_exit(console);
                }
            }
        };
        trace!(%query, "player input");

        let command = match parse_command(&self.catalog, &query) {
            Ok(command) => command,
            Err(FictionError::UnknownCommand(keyword)) => {
                return self.unknown_command(console, &keyword);
            }
            Err(e) => return Err(e),
        };
        self.fails = 0;
        self.dispatch(console, command)
    }

    fn dispatch<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        command: Command,
    ) -> FictionResult<Interaction> {
        debug!(verb = ?command.verb, argument = ?command.argument, "dispatching command");
        let argument = command.argument.as_deref();
        match command.verb {
            Verb::Exit => self.command_exit(console),
            Verb::Help => self.command_help(console, argument),
            Verb::Talk => self.command_talk(console, argument),
            Verb::Go => self.command_go(console, argument),
            Verb::Info => self.command_info(console, argument),
        }
    }

    fn unknown_command<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        keyword: &str,
    ) -> FictionResult<Interaction> {
        self.fails = self.fails.saturating_add(1);
        debug!(keyword, fails = self.fails, "unknown command");

        if self.fails >= HINT_AFTER_FAILS {
            self.say(console, &["Psst, you can use `help`.".into()])?;
        } else {
            self.say(console, &["I'm not sure what do you mean.".into()])?;
        }
        if self.assistant {
            if let Some(suggestion) = suggest_keyword(&self.catalog, keyword) {
                self.say(console, &[format!("Did you mean `{suggestion}`?").into()])?;
            }
        }
        Ok(Interaction::Nothing)
    }

    // -----------------------------------------------------------------------
    // Output helpers
    // -----------------------------------------------------------------------

    /// The `[ Location ] ` tag shown before prompts and responses.
    fn prefix(&self) -> Vec<ColoredString> {
        vec!["[ ".into(), self.location().display_name(), " ] ".into()]
    }

    /// Print a response line behind the location prefix.
    fn say<C: Console + ?Sized>(
        &self,
        console: &mut C,
        fragments: &[ColoredString],
    ) -> FictionResult<()> {
        let mut line = self.prefix();
        line.extend_from_slice(fragments);
        console.print(&line)?;
        Ok(())
    }
}

/// Join display names as `A, B, C`.
fn comma_separated(names: impl IntoIterator<Item = ColoredString>) -> Vec<ColoredString> {
    let mut fragments = Vec::new();
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            fragments.push(", ".into());
        }
        fragments.push(name);
    }
    fragments
}

//! Per-verb command handlers.

use colored::ColoredString;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{ContentArrangement, Table};
use tracing::{debug, info};

use super::{Interaction, World, comma_separated};
use crate::catalog::{ARGUMENT_NOTATION, HelpTopic};
use crate::console::Console;
use crate::error::FictionResult;
use crate::speech;

impl World {
    pub(super) fn command_exit<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> FictionResult<Interaction> {
        info!("player exits");
        self.say(console, &["Goodbye!".into()])?;
        Ok(Interaction::Exit)
    }

    pub(super) fn command_help<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        menu: Option<&str>,
    ) -> FictionResult<Interaction> {
        let topic = HelpTopic::parse(menu);

        if topic.shows_commands() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Command", "Description", "Usage"]);
            for command in self.catalog.iter() {
                table.add_row(vec![
                    command.keyword.clone(),
                    command.description.clone(),
                    command.usage(),
                ]);
            }
            console.print_table("Available commands", &table)?;
        }

        if topic.shows_arguments() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Representation", "Description"]);
            for (representation, description) in ARGUMENT_NOTATION {
                table.add_row(vec![representation, description]);
            }
            console.print_table("Arguments description", &table)?;
        }

        Ok(Interaction::Nothing)
    }

    /// The character must exist, be known, be here, and have something to say.
    pub(super) fn command_talk<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        character_name: Option<&str>,
    ) -> FictionResult<Interaction> {
        let Some(name) = character_name else {
            self.say(console, &["You speak to everyone, but no one hears you.".into()])?;
            return Ok(Interaction::Nothing);
        };
        if !self.character_in_global(name) {
            self.say(console, &["You don't know this character.".into()])?;
            return Ok(Interaction::Nothing);
        }
        if !self.character_in_location(name) {
            self.say(console, &["This character is not here.".into()])?;
            return Ok(Interaction::Nothing);
        }

        let Some(id) = self.find_character(name) else {
            return Ok(Interaction::Nothing);
        };
        let character = self.character(id)?;
        if !character.is_pokable() {
            let line = [
                character.display_name(),
                " does not want to talk with you.".into(),
            ];
            self.say(console, &line)?;
            return Ok(Interaction::Nothing);
        }

        debug!(character = %character.name(), "talking");
        speech::monologue(console, character, &[character.poke.as_str().into()])?;
        Ok(Interaction::Character(id))
    }

    pub(super) fn command_go<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        location_name: Option<&str>,
    ) -> FictionResult<Interaction> {
        let Some(name) = location_name else {
            self.say(
                console,
                &["After running in circle for a while you find it worthless.".into()],
            )?;
            return Ok(Interaction::Nothing);
        };
        let Some(destination) = self.find_location(name) else {
            self.say(console, &["You don't know this location.".into()])?;
            return Ok(Interaction::Nothing);
        };
        if destination == self.location {
            self.say(console, &["You're currently here.".into()])?;
            return Ok(Interaction::Nothing);
        }

        self.location = destination;
        info!(location = %self.location().name(), "player moves");
        let line = [
            "You're now in ".into(),
            self.location().display_name(),
            ".".into(),
        ];
        self.say(console, &line)?;
        self.show_location_characters(console)?;
        Ok(Interaction::Location(destination))
    }

    /// Locations take precedence over characters with the same name.
    pub(super) fn command_info<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        name: Option<&str>,
    ) -> FictionResult<Interaction> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.location().name().to_string(),
        };

        if let Some(id) = self.find_location(&name) {
            let info = self
                .roster
                .location(id)
                .map(|l| l.info.clone())
                .unwrap_or_default();
            if info.is_empty() {
                self.say(console, &["You don't know anything about this location.".into()])?;
            } else {
                self.say(console, &[info.into()])?;
            }
            if id == self.location {
                self.show_location_characters(console)?;
                self.show_other_locations(console)?;
            }
        } else if let Some(id) = self.find_character(&name) {
            let character = self.character(id)?;
            let standing = [
                character.display_name(),
                " has ".into(),
                character.standing.color_text(),
                " standing towards you.".into(),
            ];
            self.say(console, &standing)?;
            if !character.info.is_empty() {
                let lore = [
                    character.display_name(),
                    "-".into(),
                    character.info.as_str().into(),
                ];
                self.say(console, &lore)?;
            }
        } else {
            self.say(console, &["I don't know what do you mean.".into()])?;
        }

        Ok(Interaction::Nothing)
    }

    /// Count and list the characters in the player's location.
    pub(super) fn show_location_characters<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> FictionResult<()> {
        let names: Vec<ColoredString> = self
            .characters_here()
            .into_iter()
            .map(|(_, c)| c.display_name())
            .collect();
        let line = listing(
            names,
            "There are no characters in this location.",
            "character in this location",
            "characters in this location",
        );
        self.say(console, &line)
    }

    /// Count and list the known locations other than the player's.
    pub(super) fn show_other_locations<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> FictionResult<()> {
        let names: Vec<ColoredString> = self
            .roster
            .locations()
            .filter(|(id, l)| *id != self.location && l.known)
            .map(|(_, l)| l.display_name())
            .collect();
        let line = listing(
            names,
            "There are no other locations you can go to.",
            "other location you can go to",
            "other locations you can go to",
        );
        self.say(console, &line)
    }
}

/// `There is 1 <singular>: A.` / `There are N <plural>: A, B.`
fn listing(
    names: Vec<ColoredString>,
    empty: &str,
    singular: &str,
    plural: &str,
) -> Vec<ColoredString> {
    let head = match names.len() {
        0 => return vec![empty.into()],
        1 => format!("There is 1 {singular}: "),
        n => format!("There are {n} {plural}: "),
    };
    let mut line = vec![head.into()];
    line.extend(comma_separated(names));
    line.push(".".into());
    line
}

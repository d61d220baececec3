use std::fmt;

use colored::{ColoredString, Colorize};

use crate::standing::Standing;

/// Placeholder shown instead of the name of anything the player does not know.
pub const UNKNOWN_NAME: &str = "???";

/// Key of a location inside its [`Roster`](crate::Roster).
///
/// Keys remember which roster issued them; any other roster rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId {
    pub(crate) roster: u64,
    pub(crate) index: usize,
}

/// Key of a character inside its [`Roster`](crate::Roster).
///
/// Keys remember which roster issued them; any other roster rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId {
    pub(crate) roster: u64,
    pub(crate) index: usize,
}

impl LocationId {
    /// Position of the location in registration order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl CharacterId {
    /// Position of the character in registration order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location#{}", self.index)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character#{}", self.index)
    }
}

/// Case-insensitive name comparison used by every lookup.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A place the player can be in.
///
/// Equality compares names only.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    /// What the player knows about the location. May be empty.
    pub info: String,
    /// Unknown locations are hidden from listings and travel.
    pub known: bool,
}

impl Location {
    /// Create a known location with no info.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: String::new(),
            known: true,
        }
    }

    /// The synthetic location shown when the player is somewhere unregistered.
    pub fn unknown_placeholder() -> Self {
        Self::new(UNKNOWN_NAME)
    }

    /// Set the info text.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Set whether the player knows this location.
    pub fn with_known(mut self, known: bool) -> Self {
        self.known = known;
        self
    }

    /// The stored name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `name` refers to this location, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// The name as the player sees it: the real one, or `"???"` when unknown.
    pub fn shown_name(&self) -> &str {
        if self.known { &self.name } else { UNKNOWN_NAME }
    }

    /// Bold magenta rendering of [`Location::shown_name`].
    pub fn display_name(&self) -> ColoredString {
        self.shown_name().bold().magenta()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Location {}

/// A non-player character.
///
/// A character is assigned to exactly one location through a [`LocationId`];
/// it never owns that location. Equality compares names only.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    /// Where the character currently is.
    pub location: LocationId,
    /// Lore the player can learn through `info`. May be empty.
    pub info: String,
    /// What the character says when approached. Empty means it won't talk.
    pub poke: String,
    /// How the character feels towards the player.
    pub standing: Standing,
    /// Unknown characters render as `"???"` and cannot be addressed by name.
    pub known: bool,
}

impl Character {
    /// Create a known, neutral character at `location`.
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            location,
            info: String::new(),
            poke: String::new(),
            standing: Standing::NEUTRAL,
            known: true,
        }
    }

    /// Set the info text.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Set the line spoken when the player talks to this character.
    pub fn with_poke(mut self, poke: impl Into<String>) -> Self {
        self.poke = poke.into();
        self
    }

    /// Set the standing towards the player.
    pub fn with_standing(mut self, standing: Standing) -> Self {
        self.standing = standing;
        self
    }

    /// Set whether the player knows this character.
    pub fn with_known(mut self, known: bool) -> Self {
        self.known = known;
        self
    }

    /// The stored name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `name` refers to this character, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// Whether the character has something to say.
    pub fn is_pokable(&self) -> bool {
        !self.poke.is_empty()
    }

    /// The name as the player sees it: the real one, or `"???"` when unknown.
    pub fn shown_name(&self) -> &str {
        if self.known { &self.name } else { UNKNOWN_NAME }
    }

    /// Bold rendering of [`Character::shown_name`] in the standing's color.
    pub fn display_name(&self) -> ColoredString {
        self.shown_name().bold().color(self.standing.color())
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Character {}

#[cfg(test)]
mod tests {
    use super::*;

    /// A key no roster issued; entities do not check their location.
    fn nowhere() -> LocationId {
        LocationId { roster: 0, index: 0 }
    }

    #[test]
    fn location_defaults() {
        let bridge = Location::new("Bridge");
        assert_eq!(bridge.name(), "Bridge");
        assert!(bridge.info.is_empty());
        assert!(bridge.known);
    }

    #[test]
    fn unknown_location_hides_name() {
        let vault = Location::new("Vault").with_known(false);
        assert_eq!(vault.shown_name(), "???");
        assert_eq!(&*vault.display_name(), "???");
        assert_eq!(Location::unknown_placeholder().name(), UNKNOWN_NAME);
    }

    #[test]
    fn location_equality_is_by_name() {
        let a = Location::new("Bridge").with_info("Where the captain sits.");
        let b = Location::new("Bridge");
        assert_eq!(a, b);
        assert_ne!(a, Location::new("bridge"));
        assert!(a.is_named("BRIDGE"));
    }

    #[test]
    fn character_defaults() {
        let hevy = Character::new("Hevy", nowhere());
        assert_eq!(hevy.standing, Standing::NEUTRAL);
        assert!(hevy.known);
        assert!(!hevy.is_pokable());
        assert!(hevy.with_poke("Hi.").is_pokable());
    }

    #[test]
    fn character_display_name() {
        let rex = Character::new("Rex", nowhere()).with_standing(Standing::GOOD);
        assert_eq!(&*rex.display_name(), "Rex");
        let stranger = rex.clone().with_known(false);
        assert_eq!(&*stranger.display_name(), "???");
        assert_eq!(rex, stranger);
    }
}

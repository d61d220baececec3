use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::entity::{Character, CharacterId, Location, LocationId};
use crate::error::{CoreError, CoreResult};

/// Source of roster identities. Zero is never issued.
static NEXT_ROSTER: AtomicU64 = AtomicU64::new(1);

/// Every location and character used by a chapter.
///
/// Entries keep their registration order, which is the order listings use.
/// Names are unique per kind, ignoring case; a location and a character may
/// share a name. Keys issued by one roster resolve to nothing in another; a
/// clone shares its original's identity and keys.
#[derive(Debug, Clone)]
pub struct Roster {
    id: u64,
    locations: Vec<Location>,
    characters: Vec<Character>,

    // Indexes
    locations_by_name: HashMap<String, LocationId>,
    characters_by_name: HashMap<String, CharacterId>,
}

impl Roster {
    /// Create an empty roster with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: NEXT_ROSTER.fetch_add(1, Ordering::Relaxed),
            locations: Vec::new(),
            characters: Vec::new(),
            locations_by_name: HashMap::new(),
            characters_by_name: HashMap::new(),
        }
    }

    fn location_id(&self, index: usize) -> LocationId {
        LocationId {
            roster: self.id,
            index,
        }
    }

    fn character_id(&self, index: usize) -> CharacterId {
        CharacterId {
            roster: self.id,
            index,
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a location. Returns its key.
    pub fn add_location(&mut self, location: Location) -> CoreResult<LocationId> {
        let name_lower = location.name().to_lowercase();
        if self.locations_by_name.contains_key(&name_lower) {
            return Err(CoreError::DuplicateLocation(location.name().to_string()));
        }

        let id = self.location_id(self.locations.len());
        self.locations_by_name.insert(name_lower, id);
        self.locations.push(location);
        Ok(id)
    }

    /// Register a character. Its location must already be registered.
    pub fn add_character(&mut self, character: Character) -> CoreResult<CharacterId> {
        if self.location(character.location).is_none() {
            return Err(CoreError::UnknownLocation {
                character: character.name().to_string(),
                location: character.location,
            });
        }
        let name_lower = character.name().to_lowercase();
        if self.characters_by_name.contains_key(&name_lower) {
            return Err(CoreError::DuplicateCharacter(character.name().to_string()));
        }

        let id = self.character_id(self.characters.len());
        self.characters_by_name.insert(name_lower, id);
        self.characters.push(character);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// Get a location by key.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        if id.roster != self.id {
            return None;
        }
        self.locations.get(id.index)
    }

    /// Get a character by key.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        if id.roster != self.id {
            return None;
        }
        self.characters.get(id.index)
    }

    /// Get a mutable character by key.
    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        if id.roster != self.id {
            return None;
        }
        self.characters.get_mut(id.index)
    }

    /// All locations with their keys, in registration order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (self.location_id(i), l))
    }

    /// All characters with their keys, in registration order.
    pub fn characters(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (self.character_id(i), c))
    }

    /// Characters currently assigned to `location`.
    pub fn characters_at(
        &self,
        location: LocationId,
    ) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters().filter(move |(_, c)| c.location == location)
    }

    /// Find a location key by name (case-insensitive), known or not.
    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.locations_by_name.get(&name.to_lowercase()).copied()
    }

    /// Find a character key by name (case-insensitive), known or not.
    pub fn find_character(&self, name: &str) -> Option<CharacterId> {
        self.characters_by_name.get(&name.to_lowercase()).copied()
    }

    /// Number of registered locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of registered characters.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Standing;

    fn ship() -> (Roster, LocationId, LocationId) {
        let mut roster = Roster::new();
        let bridge = roster.add_location(Location::new("Bridge")).unwrap();
        let quarters = roster.add_location(Location::new("Quarters")).unwrap();
        (roster, bridge, quarters)
    }

    #[test]
    fn registration_order_is_kept() {
        let (mut roster, bridge, quarters) = ship();
        roster
            .add_character(Character::new("Rex", bridge))
            .unwrap();
        roster
            .add_character(Character::new("Hevy", quarters))
            .unwrap();

        let names: Vec<_> = roster.locations().map(|(_, l)| l.name()).collect();
        assert_eq!(names, ["Bridge", "Quarters"]);
        let names: Vec<_> = roster.characters().map(|(_, c)| c.name()).collect();
        assert_eq!(names, ["Rex", "Hevy"]);
        assert_eq!(roster.location_count(), 2);
        assert_eq!(roster.character_count(), 2);
    }

    #[test]
    fn duplicate_location_name_rejected() {
        let (mut roster, _, _) = ship();
        let err = roster.add_location(Location::new("BRIDGE")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateLocation(name) if name == "BRIDGE"));
    }

    #[test]
    fn duplicate_character_name_rejected() {
        let (mut roster, bridge, _) = ship();
        roster.add_character(Character::new("Rex", bridge)).unwrap();
        let err = roster
            .add_character(Character::new("rex", bridge))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCharacter(_)));
    }

    #[test]
    fn character_at_foreign_location_rejected() {
        let (mut roster, _, _) = ship();
        let nowhere = roster.location_id(7);
        let err = roster
            .add_character(Character::new("Ghost", nowhere))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "character \"Ghost\" placed at unknown location location#7"
        );
    }

    #[test]
    fn lookups_ignore_case() {
        let (mut roster, bridge, _) = ship();
        let rex = roster
            .add_character(Character::new("Rex", bridge).with_standing(Standing::BAD))
            .unwrap();
        assert_eq!(roster.find_location("bRiDgE"), Some(bridge));
        assert_eq!(roster.find_character("REX"), Some(rex));
        assert_eq!(roster.find_character("Tech"), None);
    }

    #[test]
    fn characters_at_follows_moves() {
        let (mut roster, bridge, quarters) = ship();
        let rex = roster.add_character(Character::new("Rex", bridge)).unwrap();
        assert_eq!(roster.characters_at(bridge).count(), 1);

        roster.character_mut(rex).unwrap().location = quarters;
        assert_eq!(roster.characters_at(bridge).count(), 0);
        assert_eq!(roster.characters_at(quarters).next().map(|(id, _)| id), Some(rex));
    }

    #[test]
    fn keys_from_another_roster_resolve_to_nothing() {
        let (mut roster, bridge, _) = ship();
        let rex = roster.add_character(Character::new("Rex", bridge)).unwrap();

        let (mut other, elsewhere, _) = ship();
        let stranger = other.add_character(Character::new("Stranger", elsewhere)).unwrap();
        assert_eq!(elsewhere.index(), bridge.index());
        assert_eq!(stranger.index(), rex.index());

        assert!(roster.location(elsewhere).is_none());
        assert!(roster.character(stranger).is_none());
        assert!(roster.character_mut(stranger).is_none());
        assert_eq!(roster.characters_at(elsewhere).count(), 0);
        let err = roster
            .add_character(Character::new("Ghost", elsewhere))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownLocation { .. }));
    }

    #[test]
    fn clone_keeps_keys_valid() {
        let (roster, bridge, _) = ship();
        let copy = roster.clone();
        assert_eq!(copy.location(bridge).map(Location::name), Some("Bridge"));
    }
}

//! Core types for Fix The Engines: locations, characters, and standings.
//!
//! This crate defines the records a chapter script builds before handing them
//! to the interaction engine. Characters never own their location; they hold a
//! [`LocationId`] key that the owning [`Roster`] resolves.

/// Location and character records and their identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The registry that owns every location and character of a chapter.
pub mod roster;
/// Character disposition towards the player.
pub mod standing;

/// Re-export entity types.
pub use entity::{Character, CharacterId, Location, LocationId, UNKNOWN_NAME};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export standing types.
pub use standing::{Disposition, Standing};

use crate::entity::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when assembling a roster.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A location with the same name (case-insensitive) already exists.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// A character with the same name (case-insensitive) already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateCharacter(String),

    /// A character was placed at a location key the roster does not own.
    #[error("character \"{character}\" placed at unknown location {location}")]
    UnknownLocation {
        /// The character being added.
        character: String,
        /// The unresolved location key.
        location: LocationId,
    },
}

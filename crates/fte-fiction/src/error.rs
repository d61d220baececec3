//! Error types for the fiction engine.

use std::io;

use fte_core::{CharacterId, CoreError, LocationId};
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
///
/// Unknown names typed by the player never surface as errors; the engine
/// answers them with a message. These variants cover the programmatic API.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The verb is not in the command catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A location key that this world does not own.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),

    /// A character key that this world does not own.
    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    /// Reading from or writing to the console failed.
    #[error("console error: {0}")]
    Io(#[from] io::Error),

    /// The roster could not be assembled.
    #[error("{0}")]
    Core(#[from] CoreError),
}

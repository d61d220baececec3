//! Story chapters.

pub mod one;

/// How a chapter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player played the chapter through.
    Finished,
    /// The player typed `exit` or closed the input.
    Quit,
}

//! Game settings taken from the environment.

use std::env;

/// Environment variable that turns on debug mode.
pub const DEBUG_VAR: &str = "DEBUG";

/// Settings for a game run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Skip the main menu and every narrative delay.
    pub debug: bool,
}

impl Settings {
    /// Read settings from the environment. Nothing is required.
    pub fn from_env() -> Self {
        Self {
            debug: parse_flag(env::var(DEBUG_VAR).ok().as_deref()),
        }
    }

    /// Set debug mode.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// An integer flag: any non-zero number is on; unset or unparsable is off.
fn parse_flag(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .is_some_and(|n| n != 0)
}

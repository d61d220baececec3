//! Character speech and actions.

use std::io;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use fte_core::Character;

use crate::console::{Console, Input};

/// Pause after a character says or does something.
pub const SPEECH_PAUSE: Duration = Duration::from_millis(1500);

/// The `[ Name ] ` tag in front of everything a character does.
pub fn tag(character: &Character) -> Vec<ColoredString> {
    vec!["[ ".into(), character.display_name(), " ] ".into()]
}

/// The character says `text` to the player.
pub fn monologue<C: Console + ?Sized>(
    console: &mut C,
    character: &Character,
    text: &[ColoredString],
) -> io::Result<()> {
    let mut line = tag(character);
    line.push("\"".into());
    line.extend_from_slice(text);
    line.push("\"".into());
    console.print(&line)?;
    console.pause(SPEECH_PAUSE);
    Ok(())
}

/// The character says `text` and waits for an answer.
///
/// Returns the lowercased reply, or `None` once input is closed. An
/// interrupt asks again without repeating the line.
pub fn dialogue<C: Console + ?Sized>(
    console: &mut C,
    character: &Character,
    text: &[ColoredString],
) -> io::Result<Option<String>> {
    monologue(console, character, text)?;
    loop {
        match console.read_line(&["> ".into()])? {
            Input::Line(reply) => return Ok(Some(reply.to_lowercase())),
            Input::Interrupted => continue,
            Input::Closed => return Ok(None),
        }
    }
}

/// The character does something, narrated in italics.
pub fn action<C: Console + ?Sized>(
    console: &mut C,
    character: &Character,
    text: &str,
) -> io::Result<()> {
    let mut line = tag(character);
    line.push(format!("*{text}*").italic());
    console.print(&line)?;
    console.pause(SPEECH_PAUSE);
    Ok(())
}

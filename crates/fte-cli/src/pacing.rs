//! Narrative text pacing shared by menus and chapters.

use std::io;
use std::time::Duration;

use colored::ColoredString;
use fte_fiction::Console;

/// Per-character delay of [`slow_print`].
pub const SLOW: Duration = Duration::from_millis(100);
/// Per-character delay of [`slower_print`].
pub const SLOWER: Duration = Duration::from_millis(500);
/// Pause after each [`story`] segment.
pub const STORY_PAUSE: Duration = Duration::from_secs(5);

/// Type `text` out one character at a time, `interval` apart.
pub fn print_with_interval<C: Console + ?Sized>(
    console: &mut C,
    text: &str,
    interval: Duration,
    newline: bool,
) -> io::Result<()> {
    for c in text.chars() {
        console.pause(interval);
        console.write(&[c.to_string().into()])?;
    }
    console.pause(interval);
    if newline {
        console.print(&[])?;
    }
    Ok(())
}

/// Type `text` at [`SLOW`] speed.
pub fn slow_print<C: Console + ?Sized>(
    console: &mut C,
    text: &str,
    newline: bool,
) -> io::Result<()> {
    print_with_interval(console, text, SLOW, newline)
}

/// Type `text` at [`SLOWER`] speed, for dramatic ellipses.
pub fn slower_print<C: Console + ?Sized>(
    console: &mut C,
    text: &str,
    newline: bool,
) -> io::Result<()> {
    print_with_interval(console, text, SLOWER, newline)
}

/// Show narration a segment at a time, giving the player time to read each.
pub fn story<C: Console + ?Sized>(
    console: &mut C,
    segments: &[Vec<ColoredString>],
) -> io::Result<()> {
    for segment in segments {
        console.print(segment)?;
        console.pause(STORY_PAUSE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fte_fiction::ScriptedConsole;

    #[test]
    fn typed_text_lands_on_one_line() {
        let mut console = ScriptedConsole::new();
        slow_print(&mut console, "Year: 3015", false).unwrap();
        slower_print(&mut console, "...", true).unwrap();
        assert_eq!(console.transcript(), "Year: 3015...");
        assert_eq!(console.paused(), SLOW * 11 + SLOWER * 4);
    }

    #[test]
    fn story_pauses_after_each_segment() {
        let mut console = ScriptedConsole::new();
        story(&mut console, &[vec!["One.".into()], vec!["Two.".into()]]).unwrap();
        assert_eq!(console.lines(), ["One.", "Two."]);
        assert_eq!(console.paused(), STORY_PAUSE * 2);
    }
}

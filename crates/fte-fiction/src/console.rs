//! The terminal seam: line input and styled output.
//!
//! The engine never touches stdin or stdout directly. Everything it shows goes
//! through a [`Console`] as `colored` fragments or `comfy-table` tables, and
//! every line it reads comes back as an [`Input`].

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use colored::ColoredString;
use comfy_table::Table;

/// What a single line read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without its line terminator.
    Line(String),
    /// The player pressed the interrupt key while typing.
    Interrupted,
    /// No more input will ever arrive.
    Closed,
}

/// A line-oriented terminal the engine talks through.
pub trait Console {
    /// Show `prompt` and block until the player finishes a line.
    fn read_line(&mut self, prompt: &[ColoredString]) -> io::Result<Input>;

    /// Print styled fragments followed by a newline.
    fn print(&mut self, fragments: &[ColoredString]) -> io::Result<()>;

    /// Print styled fragments without a newline.
    fn write(&mut self, fragments: &[ColoredString]) -> io::Result<()>;

    /// Print a table under a title.
    fn print_table(&mut self, title: &str, table: &Table) -> io::Result<()>;

    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Print a horizontal rule with a centered title.
    fn rule(&mut self, title: &str) -> io::Result<()>;

    /// Wait before the next output, for narrative pacing.
    fn pause(&mut self, duration: Duration);
}

/// Concatenate fragments without any styling.
pub fn plain(fragments: &[ColoredString]) -> String {
    fragments.iter().map(|f| &**f).collect()
}

/// A console fed from a queue of canned inputs that records plain output.
///
/// Each read echoes its prompt and the typed line into the transcript, the
/// way they would appear on a terminal. Once the queue is empty every read
/// returns [`Input::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Input>,
    lines: Vec<String>,
    pending: String,
    paused: Duration,
}

impl ScriptedConsole {
    /// Create a console with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will type `lines` in order.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::new();
        for line in lines {
            console.push_line(line);
        }
        console
    }

    /// Queue a typed line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.inputs.push_back(Input::Line(line.into()));
    }

    /// Queue an interrupt.
    pub fn push_interrupt(&mut self) {
        self.inputs.push_back(Input::Interrupted);
    }

    /// Number of queued inputs not read yet.
    pub fn remaining_input(&self) -> usize {
        self.inputs.len()
    }

    /// Every completed output line so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the recorded lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// The whole transcript joined with newlines.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether any recorded line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Total time the engine asked to pause.
    pub fn paused(&self) -> Duration {
        self.paused
    }

    fn finish_line(&mut self, text: &str) {
        let mut line = std::mem::take(&mut self.pending);
        line.push_str(text);
        self.lines.push(line);
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &[ColoredString]) -> io::Result<Input> {
        let input = self.inputs.pop_front().unwrap_or(Input::Closed);
        let echo = match &input {
            Input::Line(line) => format!("{}{line}", plain(prompt)),
            Input::Interrupted => format!("{}^C", plain(prompt)),
            Input::Closed => format!("{}^D", plain(prompt)),
        };
        self.finish_line(&echo);
        Ok(input)
    }

    fn print(&mut self, fragments: &[ColoredString]) -> io::Result<()> {
        self.finish_line(&plain(fragments));
        Ok(())
    }

    fn write(&mut self, fragments: &[ColoredString]) -> io::Result<()> {
        self.pending.push_str(&plain(fragments));
        Ok(())
    }

    fn print_table(&mut self, title: &str, table: &Table) -> io::Result<()> {
        self.finish_line(title);
        for line in table.lines() {
            self.lines.push(line);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn rule(&mut self, title: &str) -> io::Result<()> {
        self.finish_line(&format!("── {title} ──"));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.paused += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Colorize;

    #[test]
    fn reads_queue_then_closes() {
        let mut console = ScriptedConsole::with_lines(["go Bridge"]);
        console.push_interrupt();

        let prompt = ["[ ".into(), "Quarters".bold(), " ] ".into()];
        assert_eq!(
            console.read_line(&prompt).unwrap(),
            Input::Line("go Bridge".into())
        );
        assert_eq!(console.read_line(&prompt).unwrap(), Input::Interrupted);
        assert_eq!(console.read_line(&prompt).unwrap(), Input::Closed);
        assert_eq!(console.lines()[0], "[ Quarters ] go Bridge");
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn write_joins_next_line() {
        let mut console = ScriptedConsole::new();
        console.write(&["Year: ".into()]).unwrap();
        console.write(&["3015".red()]).unwrap();
        console.print(&["...".into()]).unwrap();
        assert_eq!(console.transcript(), "Year: 3015...");
    }

    #[test]
    fn pauses_accumulate() {
        let mut console = ScriptedConsole::new();
        console.pause(Duration::from_millis(1500));
        console.pause(Duration::from_millis(500));
        assert_eq!(console.paused(), Duration::from_secs(2));
    }
}

//! The real terminal behind the game's console.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use comfy_table::Table;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode};
use fte_fiction::{Console, Input};

use crate::settings::Settings;

/// Rule width when the terminal size is unknown.
const FALLBACK_WIDTH: usize = 80;

/// Console on stdin/stdout.
///
/// When stdin is a TTY each line is read in raw mode so Ctrl-C arrives as
/// [`Input::Interrupted`] instead of killing the game, even if stdout is
/// piped. Piped input is read line by line.
pub struct TerminalConsole {
    settings: Settings,
    stdin: StdinLock<'static>,
    stdout: Stdout,
    modes: Modes,
}

/// Which terminal features the attached streams support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Modes {
    /// Read keys in raw mode. Depends on stdin only.
    raw_input: bool,
    /// Clear the screen. Depends on stdout only.
    screen: bool,
}

impl Modes {
    fn detect(stdin_tty: bool, stdout_tty: bool) -> Self {
        Self {
            raw_input: stdin_tty,
            screen: stdout_tty,
        }
    }
}

/// Leaves raw mode when dropped, even on early return.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        disable_raw_mode().ok();
    }
}

impl TerminalConsole {
    /// Attach to the process's stdin and stdout.
    pub fn new(settings: Settings) -> Self {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let modes = Modes::detect(stdin.is_terminal(), stdout.is_terminal());
        Self {
            settings,
            stdin: stdin.lock(),
            stdout,
            modes,
        }
    }

    fn render(fragments: &[ColoredString]) -> String {
        fragments.iter().map(ToString::to_string).collect()
    }

    fn read_piped_line(&mut self) -> io::Result<Input> {
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(Input::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Input::Line(trimmed.to_string()))
    }

    fn read_raw_line(&mut self) -> io::Result<Input> {
        let input = {
            let _raw = RawMode::enable()?;
            self.edit_line()?
        };
        writeln!(self.stdout)?;
        self.stdout.flush()?;
        Ok(input)
    }

    /// Minimal line editing: printable characters, backspace, enter.
    fn edit_line(&mut self) -> io::Result<Input> {
        let mut line = String::new();
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => return Ok(Input::Interrupted),
                KeyCode::Char('d') if ctrl && line.is_empty() => return Ok(Input::Closed),
                KeyCode::Enter => return Ok(Input::Line(line)),
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        write!(self.stdout, "\u{8} \u{8}")?;
                    }
                }
                KeyCode::Char(c) if !ctrl => {
                    line.push(c);
                    write!(self.stdout, "{c}")?;
                }
                _ => {}
            }
            self.stdout.flush()?;
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &[ColoredString]) -> io::Result<Input> {
        self.write(prompt)?;
        if self.modes.raw_input {
            self.read_raw_line()
        } else {
            self.read_piped_line()
        }
    }

    fn print(&mut self, fragments: &[ColoredString]) -> io::Result<()> {
        writeln!(self.stdout, "{}", Self::render(fragments))
    }

    fn write(&mut self, fragments: &[ColoredString]) -> io::Result<()> {
        write!(self.stdout, "{}", Self::render(fragments))?;
        self.stdout.flush()
    }

    fn print_table(&mut self, title: &str, table: &Table) -> io::Result<()> {
        writeln!(self.stdout, "{}", title.italic())?;
        writeln!(self.stdout, "{table}")
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.modes.screen {
            execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn rule(&mut self, title: &str) -> io::Result<()> {
        let width = terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(FALLBACK_WIDTH);
        let label = format!(" {title} ");
        let fill = width.saturating_sub(label.chars().count());
        let left = "─".repeat(fill / 2);
        let right = "─".repeat(fill - fill / 2);
        writeln!(self.stdout, "{}{}{}", left.green(), label.bold(), right.green())
    }

    fn pause(&mut self, duration: Duration) {
        if !self.settings.debug {
            thread::sleep(duration);
        }
    }
}

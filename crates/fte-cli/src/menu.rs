//! The main menu shown before a game starts.

use std::io;
use std::time::Duration;

use colored::Colorize;
use fte_fiction::{Console, Input};
use tracing::info;

const BANNER: &str = r#"
 _____  ____  __ __      ______  __ __    ___        ___  ____    ____  ____  ____     ___  _____
|     ||    ||  |  |    |      ||  |  |  /  _]      /  _]|    \  /    ||    ||    \   /  _]/ ___/
|   __| |  | |  |  |    |      ||  |  | /  [_      /  [_ |  _  ||   __| |  | |  _  | /  [_(   \_
|  |_   |  | |_   _|    |_|  |_||  _  ||    _]    |    _]|  |  ||  |  | |  | |  |  ||    _]\__  |
|   _]  |  | |     |      |  |  |  |  ||   [_     |   [_ |  |  ||  |_ | |  | |  |  ||   [_ /  \ |
|  |    |  | |  |  |      |  |  |  |  ||     |    |     ||  |  ||     | |  | |  |  ||     |\    |
|__|   |____||__|__|      |__|  |__|__||_____|    |_____||__|__||___,_||____||__|__||_____| \___|
"#;

/// How long the farewell stays on screen.
const FAREWELL_PAUSE: Duration = Duration::from_secs(3);

/// What the player picked in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start chapter one.
    Play,
    /// Leave the game.
    Quit,
}

/// Redraw the menu until the player picks an entry.
///
/// Closed input quits without the farewell.
pub fn main_menu<C: Console + ?Sized>(console: &mut C) -> io::Result<MenuChoice> {
    loop {
        console.clear()?;
        console.rule("Main menu")?;
        console.print(&[BANNER.bold()])?;
        console.print(&["1. Let's fix them!".into()])?;
        console.print(&["2. Maybe later...".into()])?;
        console.print(&[])?;

        let choice = match console.read_line(&["Your choice? ".into()])? {
            Input::Line(choice) => choice,
            Input::Interrupted => continue,
            Input::Closed => return Ok(MenuChoice::Quit),
        };
        match choice.trim() {
            "1" => {
                info!("starting a new game");
                return Ok(MenuChoice::Play);
            }
            "2" => {
                console.print(&["👋 Goodbye!".into()])?;
                console.pause(FAREWELL_PAUSE);
                return Ok(MenuChoice::Quit);
            }
            _ => {}
        }
    }
}

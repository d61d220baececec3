//! The one-shot assistant question asked on a first chapter.

use std::time::Duration;

use colored::{ColoredString, Colorize};
use tracing::info;

use super::World;
use crate::console::{Console, Input};
use crate::error::FictionResult;

/// Pause between tutorial lines.
const TUTORIAL_PAUSE: Duration = Duration::from_secs(2);

/// The `[ Help ] ` tag shown while onboarding.
fn help_prefix() -> Vec<ColoredString> {
    vec!["[ ".into(), "Help".blue(), " ] ".into()]
}

fn tutorial() -> [Vec<ColoredString>; 4] {
    [
        vec![
            "Fix The Engines".bold(),
            " is text-based, paragraph game. There is no mouse control,".into(),
            " you operate only with commands.".into(),
        ],
        vec!["You can show them by typing \"help\" during interaction with the World.".into()],
        vec![
            "All commands are single words. For example \"help\" or \"go\" instead of \"go to\"."
                .into(),
        ],
        vec!["Have fun! 😄".into()],
    ]
}

impl World {
    /// Ask whether to enable the assistant and, if so, teach the basics.
    ///
    /// Clears the first-interaction flag whatever the answer. Closed input
    /// counts as "no".
    pub(super) fn do_first_interaction<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> FictionResult<()> {
        let mut question = help_prefix();
        question.push(
            "This is your first interaction with the World. Would you like to enable assistant?"
                .into(),
        );
        console.print(&question)?;

        let mut prompt = help_prefix();
        let enable = loop {
            match console.read_line(&prompt)? {
                Input::Line(answer) => match answer.to_lowercase().as_str() {
                    "yes" => break true,
                    "no" => break false,
                    _ => {}
                },
                Input::Interrupted => {}
                Input::Closed => break false,
            }
            prompt = help_prefix();
            prompt.push("\"yes\" or \"no\"? ".into());
        };
        self.first_interaction = false;
        info!(assistant = enable, "onboarding answered");

        if !enable {
            let mut line = help_prefix();
            line.push("OK! I won't ask you again. Have fun!".into());
            console.print(&line)?;
            return Ok(());
        }

        for text in tutorial() {
            let mut line = help_prefix();
            line.extend(text);
            console.print(&line)?;
            console.pause(TUTORIAL_PAUSE);
        }
        self.assistant = true;
        Ok(())
    }
}

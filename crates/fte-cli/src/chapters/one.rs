//! Chapter I: waking up on the Epsilon IV.

use std::time::Duration;

use fte_core::{Character, CharacterId, Location, LocationId, Roster, Standing};
use fte_fiction::speech::{action, dialogue, monologue};
use fte_fiction::{Console, FictionResult, Interaction, World};
use tracing::info;

use super::Ending;
use crate::pacing::{slow_print, slower_print, story};

const TITLE: &str = "Chapter I";

/// How long the ship log stays up before the story starts.
const LOG_PAUSE: Duration = Duration::from_secs(3);

const SHIP_LOG: [&str; 3] = [
    "Year:      3015",
    "Ship:      Epsilon IV",
    "Mission:   Who cares?",
];

/// Ids of everyone and everything the script refers to.
struct Cast {
    capsules: LocationId,
    engine_deck: LocationId,
    hevy: CharacterId,
    tech: CharacterId,
}

fn build_world() -> FictionResult<(World, Cast)> {
    let mut roster = Roster::new();
    let bridge = roster.add_location(Location::new("Bridge"))?;
    let capsules = roster.add_location(Location::new("Capsules"))?;
    let engine_deck = roster.add_location(Location::new("Engine Deck"))?;
    let quarters = roster.add_location(Location::new("Quarters"))?;

    let hevy = roster.add_character(
        Character::new("Hevy", quarters)
            .with_poke("Good to see you.")
            .with_standing(Standing::GOOD),
    )?;
    roster.add_character(Character::new("Rex", bridge).with_poke("Yes sergant? Oh, wait."))?;
    roster.add_character(
        Character::new("Mixiu", bridge).with_poke("What the fuck do you want?"),
    )?;
    let tech = roster.add_character(
        Character::new("Tech", engine_deck).with_poke("We should invest in twin ion engines."),
    )?;

    let world = World::new(roster, quarters).with_first_interaction(true);
    let cast = Cast {
        capsules,
        engine_deck,
        hevy,
        tech,
    };
    Ok((world, cast))
}

/// Play the chapter.
pub fn run<C: Console + ?Sized>(console: &mut C) -> FictionResult<Ending> {
    let (mut world, cast) = build_world()?;
    info!("chapter one started");

    ship_log(console)?;

    console.clear()?;
    console.rule(TITLE)?;
    let hevy = world.character(cast.hevy)?;
    story(
        console,
        &[
            vec![
                "You wake up in your bed, someone is trying to talk to you, ".into(),
                "but you're too sleepy to understand.".into(),
            ],
            vec![
                "You recognize them. It's your roommate, ".into(),
                hevy.display_name(),
                ".".into(),
            ],
            vec!["He's shaking you and after a while you can finally understand him...".into()],
        ],
    )?;

    let Some(dead) = wake_up(console, hevy)? else {
        info!("player left while waking up");
        return Ok(Ending::Quit);
    };
    let reply = if dead { "Unfortunately no" } else { "That's great" };
    monologue(
        console,
        hevy,
        &[format!("{reply}, now wake up and get a move on, or we're screwed.").into()],
    )?;
    action(console, hevy, "Throws you your clothes.")?;
    monologue(console, hevy, &["Aight, you ready?".into()])?;
    action(console, hevy, "Claps to you.")?;
    let capsules = world.roster().location(cast.capsules).map(Location::display_name);
    let engine_deck = world.roster().location(cast.engine_deck).map(Location::display_name);
    if let (Some(capsules), Some(engine_deck)) = (capsules, engine_deck) {
        monologue(
            console,
            hevy,
            &[
                "We either go to ".into(),
                capsules,
                " or to ".into(),
                engine_deck,
                ", I don't trust our engineers tho.".into(),
            ],
        )?;
    }

    world.character_mut(cast.hevy)?.poke = "There's no time, let's go!".to_string();

    let destination = loop {
        match world.interaction(console)? {
            Interaction::Location(id) if id == cast.capsules || id == cast.engine_deck => break id,
            Interaction::Exit => {
                info!("player quit chapter one");
                return Ok(Ending::Quit);
            }
            _ => {}
        }
    };
    info!(location = %world.location().name(), "chapter one destination reached");

    if destination == cast.capsules {
        world.character_enters(console, cast.hevy, false)?;
        monologue(
            console,
            world.character(cast.hevy)?,
            &["This ship sucks either way...".into()],
        )?;
    } else {
        monologue(
            console,
            world.character(cast.tech)?,
            &["Hey! What are you doing here?".into()],
        )?;
        world.character_enters(console, cast.hevy, false)?;
        monologue(
            console,
            world.character(cast.hevy)?,
            &["Don't worry, we're here to help.".into()],
        )?;
    }

    story(console, &[vec!["...more coming soon!".into()]])?;
    Ok(Ending::Finished)
}

fn ship_log<C: Console + ?Sized>(console: &mut C) -> FictionResult<()> {
    console.clear()?;
    console.rule(TITLE)?;
    for _ in 0..3 {
        console.print(&[])?;
    }
    for line in SHIP_LOG {
        slow_print(console, line, false)?;
        slower_print(console, "...", true)?;
    }
    console.pause(LOG_PAUSE);
    Ok(())
}

/// Hevy asks until the player answers yes or no.
///
/// `Some(true)` means the player claims to be dead. `None` once input closes.
fn wake_up<C: Console + ?Sized>(
    console: &mut C,
    hevy: &Character,
) -> FictionResult<Option<bool>> {
    let mut question = "Hey! Man! Are you dead already?";
    loop {
        match dialogue(console, hevy, &[question.into()])?.as_deref() {
            Some("yes") => return Ok(Some(true)),
            Some("no") => return Ok(Some(false)),
            Some(_) => question = "...",
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fte_fiction::ScriptedConsole;

    fn play(lines: &[&str]) -> (Ending, ScriptedConsole) {
        let mut console = ScriptedConsole::with_lines(lines.iter().copied());
        let ending = run(&mut console).unwrap();
        (ending, console)
    }

    #[test]
    fn world_layout() {
        let (world, cast) = build_world().unwrap();
        assert_eq!(world.location().name(), "Quarters");
        assert_eq!(world.roster().location_count(), 4);
        assert_eq!(world.roster().character_count(), 4);
        assert_eq!(world.character(cast.hevy).unwrap().standing, Standing::GOOD);
        assert_eq!(world.character(cast.tech).unwrap().location, cast.engine_deck);
        assert!(world.find_character("Rex").is_some());
        assert!(world.find_character("Mixiu").is_some());
    }

    #[test]
    fn capsules_ending() {
        let (ending, console) = play(&["no", "no", "go Capsules"]);
        assert_eq!(ending, Ending::Finished);
        assert!(console.saw("Year:      3015..."));
        assert!(console.saw("Mission:   Who cares?..."));
        assert!(console.saw("[ Hevy ] \"Hey! Man! Are you dead already?\""));
        assert!(console.saw("That's great, now wake up and get a move on, or we're screwed."));
        assert!(console.saw("[ Hevy ] *Throws you your clothes.*"));
        assert!(console.saw("OK! I won't ask you again. Have fun!"));
        assert!(console.saw("You're now in Capsules."));
        assert!(console.saw("[ Hevy ] *Walks in.*"));
        assert!(console.saw("This ship sucks either way..."));
        assert!(console.saw("...more coming soon!"));
    }

    #[test]
    fn engine_deck_ending() {
        let (ending, console) = play(&["yes", "yes", "go engine deck"]);
        assert_eq!(ending, Ending::Finished);
        assert!(console.saw("Unfortunately no, now wake up"));
        assert!(console.saw("Have fun! 😄"));
        assert!(console.saw("[ Tech ] \"Hey! What are you doing here?\""));
        assert!(console.saw("[ Hevy ] \"Don't worry, we're here to help.\""));
        assert!(console.saw("...more coming soon!"));
    }

    #[test]
    fn hevy_repeats_until_answered() {
        let (_, console) = play(&["maybe", "what?", "no", "no", "go Capsules"]);
        let repeats = console
            .lines()
            .iter()
            .filter(|l| l.contains("[ Hevy ] \"...\""))
            .count();
        assert_eq!(repeats, 2);
    }

    #[test]
    fn other_places_keep_the_chapter_going() {
        let (ending, console) = play(&["no", "no", "talk Hevy", "go Bridge", "go Capsules"]);
        assert_eq!(ending, Ending::Finished);
        assert!(console.saw("There's no time, let's go!"));
        assert!(console.saw("You're now in Bridge."));
        assert!(console.saw("This ship sucks either way..."));
    }

    #[test]
    fn exit_quits() {
        let (ending, console) = play(&["no", "no", "exit"]);
        assert_eq!(ending, Ending::Quit);
        assert!(console.saw("Goodbye!"));
        assert!(!console.saw("more coming soon"));
    }

    #[test]
    fn closed_input_quits_while_waking_up() {
        let (ending, console) = play(&[]);
        assert_eq!(ending, Ending::Quit);
        assert!(!console.saw("now wake up"));
    }
}

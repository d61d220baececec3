//! Terminal frontend for Fix The Engines, a paragraph game about a ship whose
//! engines need fixing.

mod chapters;
mod menu;
mod pacing;
mod settings;
mod terminal;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::chapters::Ending;
use crate::menu::MenuChoice;
use crate::settings::Settings;
use crate::terminal::TerminalConsole;

#[derive(Parser)]
#[command(
    name = "fte",
    about = "Fix The Engines: a text-based paragraph game",
    version
)]
struct Cli {
    /// Skip the main menu and every narrative delay (same as DEBUG=1)
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if cli.debug {
        settings = settings.with_debug(true);
    }
    init_tracing(&settings);

    if let Err(e) = run(settings) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(settings: Settings) -> Result<(), String> {
    let mut console = TerminalConsole::new(settings.clone());

    if !settings.debug {
        let choice = menu::main_menu(&mut console).map_err(|e| format!("terminal error: {e}"))?;
        if choice == MenuChoice::Quit {
            return Ok(());
        }
    }

    match chapters::one::run(&mut console).map_err(|e| e.to_string())? {
        Ending::Finished => tracing::info!("chapter one finished"),
        Ending::Quit => tracing::info!("player quit during chapter one"),
    }
    Ok(())
}

/// Log to stderr so diagnostics never mix with the story on stdout.
fn init_tracing(settings: &Settings) {
    let default_filter = if settings.debug {
        "fte=debug,fte_fiction=debug,fte_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

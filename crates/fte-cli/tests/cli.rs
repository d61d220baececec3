//! Integration tests for the `fte` command-line binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// The game binary with colors off and no inherited debug setting.
fn fte() -> Command {
    let mut cmd = Command::cargo_bin("fte").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("DEBUG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn debug_flag_skips_menu_and_plays_capsules_ending() {
    fte()
        .arg("--debug")
        .write_stdin("no\nno\ngo Capsules\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main menu").not())
        .stdout(predicate::str::contains("[ Hevy ] \"Hey! Man! Are you dead already?\""))
        .stdout(predicate::str::contains("You're now in Capsules."))
        .stdout(predicate::str::contains("...more coming soon!"));
}

#[test]
fn debug_env_var_skips_menu() {
    fte()
        .env("DEBUG", "1")
        .write_stdin("yes\nno\ngo Engine Deck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfortunately no"))
        .stdout(predicate::str::contains("Hey! What are you doing here?"));
}

#[test]
fn exit_command_ends_game() {
    fte()
        .arg("--debug")
        .write_stdin("no\nno\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("more coming soon").not());
}

#[test]
fn unknown_command_then_closed_input() {
    fte()
        .arg("--debug")
        .write_stdin("no\nno\nlook around\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm not sure what do you mean."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn help_lists_commands() {
    fte()
        .arg("--debug")
        .write_stdin("no\nno\nhelp commands\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands"))
        .stdout(predicate::str::contains("go <location name>"));
}

#[test]
fn menu_quits_on_closed_input() {
    fte()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main menu"))
        .stdout(predicate::str::contains("2. Maybe later..."));
}

#[test]
fn version_flag() {
    fte()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fte"));
}

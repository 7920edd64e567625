//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and pipe mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ethiocal")
        .about("Convert dates between the Ethiopian and Gregorian calendars")
        .subcommand_required(false)
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare Y-M-D triples)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .help("Month-name script: latin or geez")
                .value_parser(["latin", "geez"])
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./ethiocal.toml)")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommands(conversion_commands())
}

/// Build the command tree for one line of pipe-mode input.
///
/// Lines carry only a subcommand; output flags come from the process.
pub fn build_line_cmd() -> Command {
    Command::new("ethiocal")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommands(conversion_commands())
}

fn conversion_commands() -> Vec<Command> {
    vec![
        Command::new("to-gregorian")
            .about("Convert an Ethiopian date to the Gregorian calendar")
            .arg(date_arg()),
        Command::new("to-ethiopian")
            .about("Convert a Gregorian date to the Ethiopian calendar")
            .arg(date_arg()),
        Command::new("format")
            .about("Render an Ethiopian date with its month name")
            .arg(date_arg()),
        Command::new("today").about("Show today's date in both calendars"),
    ]
}

fn date_arg() -> Arg {
    Arg::new("date")
        .help("Date as `Y M D`, `Y-M-D`, or a JSON array `[Y, M, D]`")
        .required(true)
        .num_args(1..)
        .allow_negative_numbers(true)
}

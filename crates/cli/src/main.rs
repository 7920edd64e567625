//! ethiocal CLI: Ethiopian/Gregorian date conversion.
//!
//! Two modes:
//! - **Shell mode**: `ethiocal [flags] COMMAND`, single command then exit
//! - **Pipe mode**: `echo "to-gregorian 2016 1 1" | ethiocal`, line-by-line from stdin

mod commands;
mod config;
mod format;
mod logging;
mod parse;
mod pipe;
mod state;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use ethiocal_core::MonthScript;
use tracing::debug;

use commands::build_cli;
use config::CliConfig;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_action;
use state::SessionState;

fn main() {
    let mut cli = build_cli();
    let matches = cli.get_matches_mut();

    let config = match CliConfig::load(matches.get_one::<String>("config").map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    };

    logging::init(matches.get_count("verbose"), config.log.as_deref());
    debug!(?config, "configuration loaded");

    // Flags override the config file
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        config.output
    };
    let script = matches
        .get_one::<String>("script")
        .and_then(|s| s.parse::<MonthScript>().ok())
        .unwrap_or(config.script);

    let mut state = SessionState::new(script);

    if matches.subcommand().is_some() {
        process::exit(run_shell_mode(&matches, &mut state, output_mode));
    } else if std::io::stdin().is_terminal() {
        let _ = cli.print_help();
        println!();
    } else {
        process::exit(pipe::run_pipe(&mut state, output_mode));
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches).and_then(|action| state.execute(action)) {
        Ok(output) => {
            println!("{}", format_output(&output, mode));
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

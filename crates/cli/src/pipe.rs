//! Pipe mode: read commands from stdin, execute each.
//!
//! One command per line, e.g. `to-gregorian 2016 1 1`. Blank lines and
//! lines starting with `#` are skipped.

use std::io::{self, BufRead};

use tracing::{info, warn};

use crate::commands::build_line_cmd;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::matches_to_action;
use crate::state::SessionState;

/// Run every line of stdin, returning the process exit code.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let code = run_lines(state, mode, stdin.lock(), &mut io::stdout(), &mut io::stderr());
    info!(commands = state.commands_run(), exit_code = code, "Pipe complete");
    code
}

/// Execute each line of `input`, writing results to `out` and failures to `err`.
///
/// Returns 1 if any line failed, 0 otherwise.
pub fn run_lines<R, W, E>(
    state: &mut SessionState,
    mode: OutputMode,
    input: R,
    out: &mut W,
    err: &mut E,
) -> i32
where
    R: BufRead,
    W: io::Write,
    E: io::Write,
{
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "stopped reading stdin");
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match shlex::split(trimmed) {
            Some(t) if !t.is_empty() => t,
            Some(_) => continue,
            None => {
                let _ = writeln!(err, "(error) Invalid quoting: {}", trimmed);
                exit_code = 1;
                continue;
            }
        };

        let matches = match build_line_cmd().try_get_matches_from(tokens) {
            Ok(m) => m,
            Err(e) => {
                let _ = writeln!(err, "{}", e);
                exit_code = 1;
                continue;
            }
        };

        let result = matches_to_action(&matches).and_then(|action| state.execute(action));
        match result {
            Ok(output) => {
                let _ = writeln!(out, "{}", format_output(&output, mode));
            }
            Err(e) => {
                let _ = writeln!(err, "{}", format_error(&e, mode));
                exit_code = 1;
            }
        }
    }

    exit_code
}

//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): `2016 Meskerem 1 -> 2023-09-12`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare `Y-M-D` triples, tab separated

use ethiocal_core::{EthiopianDate, InvalidDateError};
use serde::{Deserialize, Serialize};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &InvalidDateError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string(),
            "field": err.field(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => err.to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Gregorian { gregorian, .. } => gregorian.to_string(),
        Output::Ethiopian { ethiopian, .. } | Output::Formatted { ethiopian, .. } => {
            raw_ethiopian(ethiopian)
        }
        Output::Today {
            gregorian,
            ethiopian,
            ..
        } => format!("{}\t{}", gregorian, raw_ethiopian(ethiopian)),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Gregorian {
            ethiopian,
            gregorian,
        } => format!("{} -> {}", ethiopian, gregorian),
        Output::Ethiopian {
            gregorian, display, ..
        } => format!("{} -> {}", gregorian, display),
        Output::Formatted { display, .. } => display.clone(),
        Output::Today {
            gregorian, display, ..
        } => format!("{} / {}", gregorian, display),
    }
}

fn raw_ethiopian(date: &EthiopianDate) -> String {
    let (year, month, day) = date.parts();
    format!("{}-{}-{}", year, month, day)
}

//! ArgMatches → CliAction conversion.
//!
//! The date argument takes one to three values:
//! - three values are the components `Y M D`
//! - one value is text, `Y-M-D` or a JSON array `[Y, M, D]`

use clap::ArgMatches;
use ethiocal_core::{EthiopianDate, GregorianDate, InvalidDateError};

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Ethiopian → Gregorian
    ToGregorian(EthiopianDate),
    /// Gregorian → Ethiopian
    ToEthiopian(GregorianDate),
    /// Render an Ethiopian date
    Format(EthiopianDate),
    /// Today's local date in both calendars
    Today,
}

/// Convert parsed matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, InvalidDateError> {
    match matches.subcommand() {
        Some(("to-gregorian", sub)) => Ok(CliAction::ToGregorian(date_arg(sub)?)),
        Some(("to-ethiopian", sub)) => Ok(CliAction::ToEthiopian(date_arg(sub)?)),
        Some(("format", sub)) => Ok(CliAction::Format(date_arg(sub)?)),
        _ => Ok(CliAction::Today),
    }
}

/// Read the `date` argument as a date in either calendar.
fn date_arg<D>(matches: &ArgMatches) -> Result<D, InvalidDateError>
where
    D: std::str::FromStr<Err = InvalidDateError>,
{
    let values: Vec<&str> = matches
        .get_many::<String>("date")
        .map(|v| v.map(String::as_str).collect())
        .unwrap_or_default();

    match values.as_slice() {
        [text] => text.parse(),
        [_, _, _] => values.join(" ").parse(),
        _ => Err(InvalidDateError::WrongArity {
            expected: 3,
            actual: values.len(),
        }),
    }
}

//! Display strings for Ethiopian dates
//!
//! Dates render as `"{year} {monthName} {day}"`, with the month name looked
//! up in a 13-entry table at `month - 1`.

use crate::date::EthiopianDate;
use crate::month::MonthScript;

/// Render a date with Latin month names, e.g. `"2016 Meskerem 1"`
pub fn format_ethiopian(date: &EthiopianDate) -> String {
    format_ethiopian_with(date, MonthScript::Latin)
}

/// Render a date with the month-name table of `script`
pub fn format_ethiopian_with(date: &EthiopianDate, script: MonthScript) -> String {
    let name = script.table()[usize::from(date.month()) - 1];
    format!("{} {} {}", date.year(), name, date.day())
}

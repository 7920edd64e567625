//! Core types and conversions for ethiocal
//!
//! This crate converts dates between the Ethiopian and Gregorian calendars:
//! - EthiopianDate / GregorianDate: validated `(year, month, day)` triples
//! - to_gregorian / to_ethiopian: the two conversion directions
//! - EthiopianMonth, MonthScript: month names in Latin and Ge'ez script
//! - format_ethiopian: `"{year} {monthName} {day}"` display helper
//! - InvalidDateError: the single error type
//! - calendar: leap rules, the new-year anchor and 1582 reform constants
//!
//! All operations are pure and reentrant.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod convert;
pub mod date;
pub mod error;
pub mod format;
pub mod month;

pub use calendar::{
    is_ethiopian_leap_year, is_gregorian_leap_year, is_in_reform_gap, new_year_day, MAX_YEAR,
    MIN_YEAR,
};
pub use convert::{to_ethiopian, to_ethiopian_parts, to_gregorian, to_gregorian_parts};
pub use date::{EthiopianDate, GregorianDate};
pub use error::{DateField, InvalidDateError, Result};
pub use format::{format_ethiopian, format_ethiopian_with};
pub use month::{EthiopianMonth, MonthScript};

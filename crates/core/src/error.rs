//! Error types for calendar conversion
//!
//! Every failure in this crate is an input-validation failure, so there is a
//! single error type, [`InvalidDateError`], whose variants name the reason.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, InvalidDateError>;

/// One component of a `(year, month, day)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    /// The year component
    Year,
    /// The month component
    Month,
    /// The day component
    Day,
}

impl DateField {
    /// Field for a position in an ordered triple
    pub(crate) fn at(index: usize) -> Self {
        match index {
            0 => DateField::Year,
            1 => DateField::Month,
            _ => DateField::Day,
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Year => f.write_str("year"),
            DateField::Month => f.write_str("month"),
            DateField::Day => f.write_str("day"),
        }
    }
}

/// A date triple that cannot be converted
///
/// This is a permanent failure: there is no partial result and retrying the
/// same input gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDateError {
    /// A component is zero
    #[error("invalid date: {field} must not be zero")]
    ZeroComponent {
        /// The zero component
        field: DateField,
    },

    /// A component is null or absent
    #[error("invalid date: {field} is missing")]
    MissingComponent {
        /// The missing component
        field: DateField,
    },

    /// The triple does not have exactly three components
    #[error("invalid date: expected {expected} components, got {actual}")]
    WrongArity {
        /// Required number of components
        expected: usize,
        /// Number of components supplied
        actual: usize,
    },

    /// A component lies outside its calendar range
    #[error("invalid date: {field} {value} out of range ({min}..={max})")]
    OutOfRange {
        /// The offending component
        field: DateField,
        /// Value supplied
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Gregorian date dropped by the October 1582 reform
    #[error("invalid date: {year}-{month:02}-{day:02} falls in the 1582 reform gap")]
    ReformGap {
        /// Gregorian year
        year: i32,
        /// Gregorian month
        month: u8,
        /// Gregorian day
        day: u8,
    },

    /// Text that is not a date triple
    #[error("invalid date: cannot parse '{input}': {reason}")]
    Parse {
        /// Input text
        input: String,
        /// What went wrong
        reason: String,
    },

    /// The month walk ran past the end of its table
    #[error("invalid date: year {year} is outside the convertible range")]
    Unsupported {
        /// Year whose offsets did not fit the tables
        year: i32,
    },
}

impl InvalidDateError {
    /// Create an out-of-range error
    pub(crate) fn out_of_range(field: DateField, value: i64, min: i64, max: i64) -> Self {
        InvalidDateError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create a parse error
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        InvalidDateError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The component this error is about, if it is about a single one
    pub fn field(&self) -> Option<DateField> {
        match self {
            InvalidDateError::ZeroComponent { field }
            | InvalidDateError::MissingComponent { field }
            | InvalidDateError::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }
}

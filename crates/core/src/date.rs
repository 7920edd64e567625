//! Date triples for both calendars
//!
//! A date is a `(year, month, day)` value with no identity beyond its
//! components. [`EthiopianDate`] and [`GregorianDate`] are distinct types so
//! the two systems cannot be mixed up at a call site.
//!
//! ## Intake
//!
//! Both types accept the triple in several shapes:
//!
//! ```
//! use ethiocal_core::EthiopianDate;
//!
//! let a = EthiopianDate::new(2016, 1, 1).unwrap();
//! let b = EthiopianDate::try_from([2016, 1, 1]).unwrap();
//! let c = EthiopianDate::from_parts(&[Some(2016), Some(1), Some(1)]).unwrap();
//! let d: EthiopianDate = "2016-1-1".parse().unwrap();
//! assert!(a == b && b == c && c == d);
//! ```
//!
//! ## Validation
//!
//! - exactly three components, none absent
//! - no zero component
//! - year in `MIN_YEAR..=MAX_YEAR`
//! - month and day inside the calendar's month table

use crate::calendar::{
    days_in_ethiopian_month, days_in_gregorian_month, is_in_reform_gap, MAX_YEAR, MIN_YEAR,
};
use crate::error::{DateField, InvalidDateError, Result};
use crate::month::EthiopianMonth;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of components in a date triple
pub const TRIPLE_LEN: usize = 3;

/// A date in the Ethiopian calendar
///
/// ## Invariants
///
/// - month is in 1..=13
/// - day is in 1..=30, or 1..=5 (1..=6 in a leap year) for Pagume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRepr")]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// A date in the proleptic Gregorian calendar
///
/// ## Invariants
///
/// - month is in 1..=12
/// - day fits the month, with February following the Gregorian leap rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRepr")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Create a date, validating the components
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateError` if a component is zero or out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        Self::from_components([i64::from(year), i64::from(month), i64::from(day)])
    }

    /// Create a date from a packed sequence of nullable components
    ///
    /// `None` stands for a null component.
    pub fn from_parts(parts: &[Option<i32>]) -> Result<Self> {
        Self::from_components(collect_components(parts)?)
    }

    fn from_components(components: [i64; TRIPLE_LEN]) -> Result<Self> {
        let [year, month, day] = components;
        reject_zero(&components)?;
        let year = check_year(year)?;
        let month = check_range(DateField::Month, month, 13)?;
        let day = check_range(
            DateField::Day,
            day,
            i64::from(days_in_ethiopian_month(year, month)),
        )?;
        Ok(EthiopianDate { year, month, day })
    }

    /// Ethiopian year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 = Meskerem … 13 = Pagume
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The month as an enum
    pub fn month_of_year(&self) -> EthiopianMonth {
        // Validated on construction
        EthiopianMonth::ALL[usize::from(self.month) - 1]
    }

    /// Components as a tuple
    #[inline]
    pub const fn parts(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Convert to the Gregorian calendar
    pub fn to_gregorian(&self) -> Result<GregorianDate> {
        crate::convert::ethiopian_to_gregorian(*self)
    }
}

impl GregorianDate {
    /// Create a date, validating the components
    ///
    /// Dates in the 1582 reform gap are accepted here; only conversion to
    /// the Ethiopian calendar rejects them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateError` if a component is zero or out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        Self::from_components([i64::from(year), i64::from(month), i64::from(day)])
    }

    /// Create a date from a packed sequence of nullable components
    pub fn from_parts(parts: &[Option<i32>]) -> Result<Self> {
        Self::from_components(collect_components(parts)?)
    }

    fn from_components(components: [i64; TRIPLE_LEN]) -> Result<Self> {
        let [year, month, day] = components;
        reject_zero(&components)?;
        let year = check_year(year)?;
        let month = check_range(DateField::Month, month, 12)?;
        let day = check_range(
            DateField::Day,
            day,
            i64::from(days_in_gregorian_month(year, month)),
        )?;
        Ok(GregorianDate { year, month, day })
    }

    /// Gregorian year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 = January … 12 = December
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Components as a tuple
    #[inline]
    pub const fn parts(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Check whether this date was dropped by the 1582 reform
    pub fn is_in_reform_gap(&self) -> bool {
        is_in_reform_gap(self.year, self.month, self.day)
    }

    /// Convert to the Ethiopian calendar
    pub fn to_ethiopian(&self) -> Result<EthiopianDate> {
        crate::convert::gregorian_to_ethiopian(*self)
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_ethiopian(self))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ============================================================================
// Packed forms
// ============================================================================

impl TryFrom<&[i32]> for EthiopianDate {
    type Error = InvalidDateError;

    fn try_from(parts: &[i32]) -> Result<Self> {
        Self::from_components(packed(parts)?)
    }
}

impl TryFrom<[i32; 3]> for EthiopianDate {
    type Error = InvalidDateError;

    fn try_from(parts: [i32; 3]) -> Result<Self> {
        Self::try_from(&parts[..])
    }
}

impl TryFrom<&[i32]> for GregorianDate {
    type Error = InvalidDateError;

    fn try_from(parts: &[i32]) -> Result<Self> {
        Self::from_components(packed(parts)?)
    }
}

impl TryFrom<[i32; 3]> for GregorianDate {
    type Error = InvalidDateError;

    fn try_from(parts: [i32; 3]) -> Result<Self> {
        Self::try_from(&parts[..])
    }
}

impl From<EthiopianDate> for [i32; 3] {
    fn from(date: EthiopianDate) -> Self {
        [date.year, i32::from(date.month), i32::from(date.day)]
    }
}

impl From<GregorianDate> for [i32; 3] {
    fn from(date: GregorianDate) -> Self {
        [date.year, i32::from(date.month), i32::from(date.day)]
    }
}

impl FromStr for EthiopianDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_parts(&parse_triple(s)?)
    }
}

impl FromStr for GregorianDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_parts(&parse_triple(s)?)
    }
}

// ============================================================================
// Serde intake
// ============================================================================

/// Accepted serialized shapes: `{"year":..,"month":..,"day":..}` or `[y, m, d]`
#[derive(Deserialize)]
#[serde(untagged)]
enum DateRepr {
    Fields {
        year: Option<i32>,
        month: Option<i32>,
        day: Option<i32>,
    },
    Parts(Vec<Option<i32>>),
}

impl DateRepr {
    fn into_parts(self) -> Vec<Option<i32>> {
        match self {
            DateRepr::Fields { year, month, day } => vec![year, month, day],
            DateRepr::Parts(parts) => parts,
        }
    }
}

impl TryFrom<DateRepr> for EthiopianDate {
    type Error = InvalidDateError;

    fn try_from(repr: DateRepr) -> Result<Self> {
        Self::from_parts(&repr.into_parts())
    }
}

impl TryFrom<DateRepr> for GregorianDate {
    type Error = InvalidDateError;

    fn try_from(repr: DateRepr) -> Result<Self> {
        Self::from_parts(&repr.into_parts())
    }
}

// ============================================================================
// Component checks
// ============================================================================

fn collect_components(parts: &[Option<i32>]) -> Result<[i64; TRIPLE_LEN]> {
    if parts.len() != TRIPLE_LEN {
        return Err(InvalidDateError::WrongArity {
            expected: TRIPLE_LEN,
            actual: parts.len(),
        });
    }
    let mut components = [0i64; TRIPLE_LEN];
    for (i, part) in parts.iter().enumerate() {
        components[i] = match part {
            Some(value) => i64::from(*value),
            None => {
                return Err(InvalidDateError::MissingComponent {
                    field: DateField::at(i),
                })
            }
        };
    }
    Ok(components)
}

fn packed(parts: &[i32]) -> Result<[i64; TRIPLE_LEN]> {
    match parts {
        [year, month, day] => Ok([i64::from(*year), i64::from(*month), i64::from(*day)]),
        _ => Err(InvalidDateError::WrongArity {
            expected: TRIPLE_LEN,
            actual: parts.len(),
        }),
    }
}

fn reject_zero(components: &[i64; TRIPLE_LEN]) -> Result<()> {
    match components.iter().position(|c| *c == 0) {
        Some(i) => Err(InvalidDateError::ZeroComponent {
            field: DateField::at(i),
        }),
        None => Ok(()),
    }
}

fn check_year(year: i64) -> Result<i32> {
    if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        return Err(InvalidDateError::out_of_range(
            DateField::Year,
            year,
            i64::from(MIN_YEAR),
            i64::from(MAX_YEAR),
        ));
    }
    Ok(year as i32)
}

fn check_range(field: DateField, value: i64, max: i64) -> Result<u8> {
    if !(1..=max).contains(&value) {
        return Err(InvalidDateError::out_of_range(field, value, 1, max));
    }
    Ok(value as u8)
}

/// Split `"Y-M-D"`, `"Y/M/D"`, `"Y M D"` or `"[Y, M, D]"` into components
///
/// The token `null` yields `None`.
pub(crate) fn parse_triple(input: &str) -> Result<Vec<Option<i32>>> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    // A dash after a digit separates components; any other dash is a sign
    let mut normalized = String::with_capacity(inner.len());
    let mut previous = ' ';
    for c in inner.chars() {
        let separator = c == '/' || c == ',' || (c == '-' && previous.is_ascii_digit());
        normalized.push(if separator { ' ' } else { c });
        previous = c;
    }

    normalized
        .split_whitespace()
        .map(|token| match token {
            "null" => Ok(None),
            _ => token
                .parse::<i32>()
                .map(Some)
                .map_err(|e| InvalidDateError::parse(input, format!("'{}': {}", token, e))),
        })
        .collect()
}

//! Calendar rules shared by both conversion directions
//!
//! ## Ethiopian calendar
//!
//! Twelve months of 30 days followed by Pagume, a 13th month of 5 days
//! (6 in a leap year). Ethiopian year `y` is a leap year when `y mod 4 == 3`.
//!
//! ## Gregorian calendar
//!
//! Proleptic Gregorian leap rule. Dates between 5 and 14 October 1582 were
//! dropped by the reform and have no calendar existence.
//!
//! The thresholds below encode that reform and must not be simplified.

/// Year of the Gregorian reform
pub const REFORM_YEAR: i32 = 1582;

/// Gregorian month of the reform gap
pub const REFORM_MONTH: u8 = 10;

/// First Gregorian day dropped by the reform
pub const REFORM_GAP_FIRST_DAY: u8 = 5;

/// Last Gregorian day dropped by the reform
pub const REFORM_GAP_LAST_DAY: u8 = 14;

/// Day of year of 4 October 1582, the last pre-reform day
pub const PRE_REFORM_LAST_DAY_OF_YEAR: i32 = 277;

/// Last Ethiopian year whose new year fell before the reform
pub const PRE_REFORM_ETHIOPIAN_YEAR: i32 = 1575;

/// Ethiopian days (Meskerem 1 through Tikimt 7) that precede the reform in
/// the final pre-reform year
pub const PRE_REFORM_ELAPSED_DAYS: i32 = 37;

/// Smallest accepted year in either calendar
pub const MIN_YEAR: i32 = 1;

/// Largest accepted year in either calendar
///
/// The new-year offset grows by three days every four centuries; past this
/// point it no longer fits the month tables.
pub const MAX_YEAR: i32 = 4000;

/// Years between the Ethiopian year and the Gregorian year in which it begins
pub const ETHIOPIAN_YEAR_OFFSET: i32 = 7;

/// Check the proleptic Gregorian leap rule
#[inline]
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Check whether an Ethiopian year has a 6-day Pagume
#[inline]
pub fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in a Gregorian month
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in an Ethiopian month
///
/// Returns 0 for a month outside 1..=13.
pub fn days_in_ethiopian_month(year: i32, month: u8) -> u8 {
    match month {
        1..=12 => 30,
        13 if is_ethiopian_leap_year(year) => 6,
        13 => 5,
        _ => 0,
    }
}

/// Day in September on which an Ethiopian year begins
///
/// `floor(g/100) - floor(g/400) - 4`, plus one when the previous Ethiopian
/// year was a leap year. `g` is the Gregorian year holding the new year, so
/// the century correction switches on the same day the calendars drift.
pub fn new_year_day(ethiopian_year: i32) -> i32 {
    let gregorian_year = ethiopian_year + ETHIOPIAN_YEAR_OFFSET;
    let day = gregorian_year.div_euclid(100) - gregorian_year.div_euclid(400) - 4;
    if (ethiopian_year - 1).rem_euclid(4) == 3 {
        day + 1
    } else {
        day
    }
}

/// Check whether a Gregorian date was dropped by the 1582 reform
#[inline]
pub fn is_in_reform_gap(year: i32, month: u8, day: u8) -> bool {
    year == REFORM_YEAR
        && month == REFORM_MONTH
        && (REFORM_GAP_FIRST_DAY..=REFORM_GAP_LAST_DAY).contains(&day)
}

/// One-based day of the year of a Gregorian date
pub fn gregorian_day_of_year(year: i32, month: u8, day: u8) -> i32 {
    let before: i32 = (1..month)
        .map(|m| i32::from(days_in_gregorian_month(year, m)))
        .sum();
    before + i32::from(day)
}

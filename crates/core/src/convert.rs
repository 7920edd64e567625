//! Ethiopian ⇄ Gregorian conversion
//!
//! Both directions count the days elapsed since an anchor and then walk a
//! table of month lengths until the count fits inside a month.
//!
//! - Ethiopian → Gregorian anchors on the Ethiopian new year
//!   ([`new_year_day`]) and walks Gregorian months from September.
//! - Gregorian → Ethiopian anchors on 1 January and walks Ethiopian months
//!   from Tahsas, which straddles the Gregorian new year.
//!
//! Before the 1582 reform the anchors are the fixed Julian alignments
//! (new year on 29 August, Tir beginning on 27 or 28 December) rather than
//! the drifting [`new_year_day`].
//!
//! Every successful result is itself a valid date in its calendar.

use crate::calendar::{
    gregorian_day_of_year, is_ethiopian_leap_year, is_gregorian_leap_year, new_year_day,
    ETHIOPIAN_YEAR_OFFSET, PRE_REFORM_ELAPSED_DAYS, PRE_REFORM_ETHIOPIAN_YEAR,
    PRE_REFORM_LAST_DAY_OF_YEAR, REFORM_YEAR,
};
use crate::date::{EthiopianDate, GregorianDate};
use crate::error::{InvalidDateError, Result};
use tracing::trace;

/// Calendar month for each slot of the Gregorian walk, August through September
const GREGORIAN_WALK_MONTHS: [u8; 14] = [8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Gregorian walk slot holding December; later slots are in the next year
const GREGORIAN_WALK_DECEMBER: usize = 4;

/// Calendar month for each slot of the Ethiopian walk
///
/// Slot 1 is the tail of Tahsas, slot 2 Tir, slot 10 Pagume; slots past
/// Pagume belong to the next Ethiopian year.
const ETHIOPIAN_WALK_MONTHS: [u8; 16] = [0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 1, 2, 3, 4, 5];

/// Ethiopian walk slot holding Pagume
const ETHIOPIAN_WALK_PAGUME: usize = 10;

/// Convert an Ethiopian date to the Gregorian calendar
///
/// # Errors
///
/// Returns `InvalidDateError` if a component is zero or out of range, or
/// if the result would fall outside the supported years.
///
/// # Example
///
/// ```
/// use ethiocal_core::to_gregorian;
///
/// let date = to_gregorian(2016, 1, 1).unwrap();
/// assert_eq!(date.parts(), (2023, 9, 12));
/// ```
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate> {
    ethiopian_to_gregorian(EthiopianDate::new(year, month, day)?)
}

/// Convert a packed Ethiopian triple to the Gregorian calendar
///
/// `None` stands for a null component.
pub fn to_gregorian_parts(parts: &[Option<i32>]) -> Result<GregorianDate> {
    ethiopian_to_gregorian(EthiopianDate::from_parts(parts)?)
}

/// Convert a Gregorian date to the Ethiopian calendar
///
/// # Errors
///
/// Returns `InvalidDateError` if a component is zero or out of range, if
/// the date lies in the 5–14 October 1582 reform gap, or if the result
/// would fall outside the supported years.
///
/// # Example
///
/// ```
/// use ethiocal_core::to_ethiopian;
///
/// let date = to_ethiopian(2000, 1, 1).unwrap();
/// assert_eq!(date.parts(), (1992, 4, 22));
/// ```
pub fn to_ethiopian(year: i32, month: u8, day: u8) -> Result<EthiopianDate> {
    gregorian_to_ethiopian(GregorianDate::new(year, month, day)?)
}

/// Convert a packed Gregorian triple to the Ethiopian calendar
pub fn to_ethiopian_parts(parts: &[Option<i32>]) -> Result<EthiopianDate> {
    gregorian_to_ethiopian(GregorianDate::from_parts(parts)?)
}

pub(crate) fn ethiopian_to_gregorian(date: EthiopianDate) -> Result<GregorianDate> {
    let (year, month, day) = date.parts();
    let mut gregorian_year = year + ETHIOPIAN_YEAR_OFFSET;

    // Month lengths from September; slot 0 is a leading August used only
    // by the pre-reform alignment. February belongs to the next year.
    let mut lengths: [i32; 14] = [0, 30, 31, 30, 31, 31, 28, 31, 30, 31, 30, 31, 31, 30];
    if is_gregorian_leap_year(gregorian_year + 1) {
        lengths[6] = 29;
    }

    let mut elapsed = (i32::from(month) - 1) * 30 + i32::from(day);
    if year <= PRE_REFORM_ETHIOPIAN_YEAR && elapsed <= PRE_REFORM_ELAPSED_DAYS {
        // New year on 29 August
        elapsed += 28;
        lengths[0] = 31;
    } else {
        elapsed += new_year_day(year) - 1;
    }

    let (slot, gregorian_day) =
        walk(&lengths, elapsed).ok_or(InvalidDateError::Unsupported { year })?;
    if slot > GREGORIAN_WALK_DECEMBER {
        gregorian_year += 1;
    }

    let result = GregorianDate::new(gregorian_year, GREGORIAN_WALK_MONTHS[slot], gregorian_day)
        .map_err(|_| InvalidDateError::Unsupported { year })?;
    trace!(ethiopian = %date, gregorian = %result, "converted to Gregorian");
    Ok(result)
}

pub(crate) fn gregorian_to_ethiopian(date: GregorianDate) -> Result<EthiopianDate> {
    let (year, month, day) = date.parts();
    if date.is_in_reform_gap() {
        return Err(InvalidDateError::ReformGap { year, month, day });
    }

    let mut ethiopian_year = year - (ETHIOPIAN_YEAR_OFFSET + 1);

    // Slot 1 is the part of Tahsas left on 1 January; the trailing Tir slot
    // is only reached by late-December dates before the reform.
    let mut lengths: [i32; 16] = [0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 5, 30, 30, 30, 30, 30];
    if is_ethiopian_leap_year(ethiopian_year) {
        lengths[ETHIOPIAN_WALK_PAGUME] = 6;
    }

    let elapsed = gregorian_day_of_year(year, month, day);
    let pre_reform = year < REFORM_YEAR
        || (year == REFORM_YEAR && elapsed <= PRE_REFORM_LAST_DAY_OF_YEAR);

    // Days of the first walked month remaining on 1 January
    let (tahsas, first_slot) = if pre_reform {
        // Tir begins on 27 December, or 28 December after a Pagume 6
        let tir = if ethiopian_year.rem_euclid(4) == 0 { 26 } else { 25 };
        lengths[1] = 0;
        lengths[2] = tir;
        (tir, 2)
    } else {
        let tahsas = new_year_day(ethiopian_year) - 3;
        lengths[1] = tahsas;
        (tahsas, 1)
    };

    let (slot, walked_day) =
        walk(&lengths, elapsed).ok_or(InvalidDateError::Unsupported { year })?;
    let ethiopian_day = if slot == first_slot {
        u8::try_from(i32::from(walked_day) + 30 - tahsas)
            .map_err(|_| InvalidDateError::Unsupported { year })?
    } else {
        walked_day
    };
    if slot > ETHIOPIAN_WALK_PAGUME {
        ethiopian_year += 1;
    }

    let result = EthiopianDate::new(ethiopian_year, ETHIOPIAN_WALK_MONTHS[slot], ethiopian_day)
        .map_err(|_| InvalidDateError::Unsupported { year })?;
    trace!(gregorian = %date, ethiopian = %result, "converted to Ethiopian");
    Ok(result)
}

/// Find the month slot holding day number `elapsed`
///
/// Returns the slot index and the one-based day within it, or `None` if
/// `elapsed` is not positive or runs past the last slot.
fn walk(lengths: &[i32], mut elapsed: i32) -> Option<(usize, u8)> {
    if elapsed < 1 {
        return None;
    }
    for (slot, length) in lengths.iter().enumerate() {
        if elapsed <= *length {
            return u8::try_from(elapsed).ok().map(|day| (slot, day));
        }
        elapsed -= length;
    }
    None
}

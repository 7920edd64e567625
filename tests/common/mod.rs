//! Shared test utilities for integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use chrono::{Datelike, NaiveDate};
pub use ethiocal::calendar::{days_in_ethiopian_month, days_in_gregorian_month};
pub use ethiocal::{
    to_ethiopian, to_gregorian, EthiopianDate, GregorianDate, InvalidDateError,
};

/// First Gregorian day after the reform gap.
pub fn first_reformed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1582, 10, 15).unwrap()
}

/// Build a `GregorianDate` from a chrono date.
pub fn gregorian(date: NaiveDate) -> GregorianDate {
    GregorianDate::new(date.year(), date.month() as u8, date.day() as u8).unwrap()
}

/// Build a chrono date from a `GregorianDate`.
pub fn naive(date: GregorianDate) -> NaiveDate {
    let (year, month, day) = date.parts();
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).unwrap()
}

/// The Ethiopian day after `date`.
pub fn next_ethiopian_day(date: EthiopianDate) -> EthiopianDate {
    let (year, month, day) = date.parts();
    if day < days_in_ethiopian_month(year, month) {
        EthiopianDate::new(year, month, day + 1).unwrap()
    } else if month < 13 {
        EthiopianDate::new(year, month + 1, 1).unwrap()
    } else {
        EthiopianDate::new(year + 1, 1, 1).unwrap()
    }
}

/// Every Gregorian day from `start` through `end`, inclusive.
pub fn gregorian_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

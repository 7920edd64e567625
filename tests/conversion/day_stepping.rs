//! Day Stepping Tests
//!
//! Walk every Gregorian day of a range and check that the Ethiopian side
//! advances by exactly one day each time.

use crate::common::*;
use chrono::NaiveDate;

#[test]
fn consecutive_days_after_reform() {
    let end = NaiveDate::from_ymd_opt(2500, 12, 31).unwrap();
    let mut previous = to_ethiopian(1582, 10, 15).unwrap();

    for day in gregorian_days(first_reformed_day(), end).skip(1) {
        let current = gregorian(day).to_ethiopian().unwrap();
        assert_eq!(current, next_ethiopian_day(previous), "Gregorian {}", day);
        previous = current;
    }
}

#[test]
fn every_day_after_reform_round_trips() {
    let end = NaiveDate::from_ymd_opt(2500, 12, 31).unwrap();
    for day in gregorian_days(first_reformed_day(), end) {
        let date = gregorian(day);
        let back = date.to_ethiopian().unwrap().to_gregorian().unwrap();
        assert_eq!(back, date);
    }
}

#[test]
fn reform_gap_is_one_day_wide() {
    let before = to_ethiopian(1582, 10, 4).unwrap();
    let after = to_ethiopian(1582, 10, 15).unwrap();
    assert_eq!(next_ethiopian_day(before), after);
}

#[test]
fn consecutive_days_in_last_julian_century() {
    // No century year between 1501 and the reform, so Julian and
    // Gregorian leap years agree
    let start = NaiveDate::from_ymd_opt(1501, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(1582, 10, 4).unwrap();
    let mut previous = gregorian(start).to_ethiopian().unwrap();

    for day in gregorian_days(start, end).skip(1) {
        let current = gregorian(day).to_ethiopian().unwrap();
        assert_eq!(current, next_ethiopian_day(previous), "Gregorian {}", day);
        previous = current;
    }
}

#[test]
fn gregorian_side_steps_with_chrono() {
    let mut date = EthiopianDate::new(1576, 1, 1).unwrap();
    let mut expected = naive(date.to_gregorian().unwrap());

    while date.year() < 2400 {
        assert_eq!(naive(date.to_gregorian().unwrap()), expected, "Ethiopian {:?}", date);
        date = next_ethiopian_day(date);
        expected = expected.succ_opt().unwrap();
    }
}

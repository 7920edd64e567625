//! Round Trip Property Tests

use crate::common::*;
use chrono::NaiveDate;
use ethiocal::{is_ethiopian_leap_year, is_gregorian_leap_year};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn ethiopian_dates_round_trip(
        year in 1576_i32..=2490_i32,
        month in 1_u8..=13_u8,
        day in 1_u8..=30_u8
    ) {
        let day = day.min(days_in_ethiopian_month(year, month));
        let date = EthiopianDate::new(year, month, day).unwrap();
        let back = date.to_gregorian().unwrap().to_ethiopian().unwrap();
        prop_assert_eq!(back, date);
    }

    #[test]
    fn gregorian_dates_round_trip(
        year in 1583_i32..=2500_i32,
        month in 1_u8..=12_u8,
        day in 1_u8..=31_u8
    ) {
        let day = day.min(days_in_gregorian_month(year, month));
        let date = GregorianDate::new(year, month, day).unwrap();
        let back = date.to_ethiopian().unwrap().to_gregorian().unwrap();
        prop_assert_eq!(back, date);
    }

    #[test]
    fn year_offset_is_seven_or_eight(
        year in 1576_i32..=2490_i32,
        month in 1_u8..=13_u8,
        day in 1_u8..=5_u8
    ) {
        let gregorian = to_gregorian(year, month, day).unwrap();
        let offset = gregorian.year() - year;
        prop_assert!(offset == 7 || offset == 8, "offset {}", offset);
        // Meskerem through Tahsas stay in the first Gregorian year
        prop_assert_eq!(offset == 7, month <= 4 && gregorian.month() >= 9);
    }

    #[test]
    fn gregorian_validation_matches_chrono(
        year in 1_i32..=4000_i32,
        month in 1_u8..=12_u8,
        day in 1_u8..=31_u8
    ) {
        let ours = GregorianDate::new(year, month, day).is_ok();
        let chrono = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).is_some();
        prop_assert_eq!(ours, chrono);
    }

    #[test]
    fn pagume_length_follows_leap_rule(year in 1_i32..=4000_i32) {
        let expected = if is_ethiopian_leap_year(year) { 6 } else { 5 };
        prop_assert_eq!(days_in_ethiopian_month(year, 13), expected);
        prop_assert_eq!(EthiopianDate::new(year, 13, 6).is_ok(), expected == 6);
        prop_assert_eq!(is_ethiopian_leap_year(year), year % 4 == 3);
    }

    #[test]
    fn gregorian_leap_rule(year in 1_i32..=4000_i32) {
        let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        prop_assert_eq!(is_gregorian_leap_year(year), expected);
    }
}

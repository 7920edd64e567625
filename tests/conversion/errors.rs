//! Error Handling Tests

use crate::common::*;
use ethiocal::{to_ethiopian_parts, to_gregorian_parts, DateField};

#[test]
fn zero_components_rejected() {
    assert_eq!(
        to_ethiopian(0, 1, 1).unwrap_err(),
        InvalidDateError::ZeroComponent {
            field: DateField::Year
        }
    );
    assert_eq!(
        to_gregorian(2015, 0, 1).unwrap_err(),
        InvalidDateError::ZeroComponent {
            field: DateField::Month
        }
    );
    assert_eq!(
        to_gregorian(2015, 1, 0).unwrap_err(),
        InvalidDateError::ZeroComponent {
            field: DateField::Day
        }
    );
}

#[test]
fn null_components_rejected() {
    let err = to_gregorian_parts(&[None, Some(1), Some(1)]).unwrap_err();
    assert_eq!(
        err,
        InvalidDateError::MissingComponent {
            field: DateField::Year
        }
    );
    let err = serde_json::from_str::<GregorianDate>("[2000, 1, null]").unwrap_err();
    assert!(err.to_string().contains("day is missing"));
}

#[test]
fn wrong_arity_rejected() {
    let cases: [&[Option<i32>]; 3] = [
        &[],
        &[Some(2016)],
        &[Some(2016), Some(1), Some(1), Some(1)],
    ];
    for parts in cases {
        let err = to_ethiopian_parts(parts).unwrap_err();
        assert_eq!(
            err,
            InvalidDateError::WrongArity {
                expected: 3,
                actual: parts.len()
            }
        );
    }
}

#[test]
fn every_reform_gap_day_rejected() {
    for day in 5..=14 {
        let err = to_ethiopian(1582, 10, day).unwrap_err();
        assert_eq!(
            err,
            InvalidDateError::ReformGap {
                year: 1582,
                month: 10,
                day
            }
        );
    }
    assert!(to_ethiopian(1582, 10, 4).is_ok());
    assert!(to_ethiopian(1582, 10, 15).is_ok());
}

#[test]
fn pagume_six_only_in_leap_years() {
    assert!(to_gregorian(2015, 13, 6).is_ok());
    let err = to_gregorian(2016, 13, 6).unwrap_err();
    assert_eq!(err.field(), Some(DateField::Day));
}

#[test]
fn out_of_range_components_rejected() {
    assert!(to_gregorian(2016, 14, 1).is_err());
    assert!(to_gregorian(2016, 1, 31).is_err());
    assert!(to_ethiopian(2023, 13, 1).is_err());
    assert!(to_ethiopian(2023, 2, 29).is_err());
    assert!(to_ethiopian(4001, 1, 1).is_err());
}

#[test]
fn errors_are_permanent() {
    let first = to_ethiopian(1582, 10, 10).unwrap_err();
    let second = to_ethiopian(1582, 10, 10).unwrap_err();
    assert_eq!(first, second);
}

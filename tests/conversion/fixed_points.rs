//! Fixed Point Tests
//!
//! Dates whose counterpart in the other calendar is known.

use crate::common::*;
use ethiocal::{format_ethiopian, new_year_day};

/// (Ethiopian, Gregorian) pairs
const KNOWN: &[((i32, u8, u8), (i32, u8, u8))] = &[
    // Battle of Adwa
    ((1888, 6, 23), (1896, 3, 1)),
    // New year after the skipped 1900 leap day
    ((1893, 1, 1), (1900, 9, 11)),
    ((1900, 1, 1), (1907, 9, 12)),
    ((1892, 6, 22), (1900, 3, 1)),
    // Millennium
    ((2000, 1, 1), (2007, 9, 12)),
    ((1992, 4, 22), (2000, 1, 1)),
    ((2015, 13, 6), (2023, 9, 11)),
    ((2016, 1, 1), (2023, 9, 12)),
    ((2016, 6, 21), (2024, 2, 29)),
    ((2017, 1, 1), (2024, 9, 11)),
];

#[test]
fn known_dates_to_gregorian() {
    for ((ey, em, ed), expected) in KNOWN {
        let actual = to_gregorian(*ey, *em, *ed).unwrap();
        assert_eq!(actual.parts(), *expected, "Ethiopian {}-{}-{}", ey, em, ed);
    }
}

#[test]
fn known_dates_to_ethiopian() {
    for (expected, (gy, gm, gd)) in KNOWN {
        let actual = to_ethiopian(*gy, *gm, *gd).unwrap();
        assert_eq!(actual.parts(), *expected, "Gregorian {}-{}-{}", gy, gm, gd);
    }
}

#[test]
fn new_year_falls_on_computed_september_day() {
    for year in 1576..=2490 {
        let date = to_gregorian(year, 1, 1).unwrap();
        assert_eq!(date.month(), 9, "year {}", year);
        assert_eq!(i32::from(date.day()), new_year_day(year), "year {}", year);
        assert_eq!(date.year(), year + 7);
    }
}

#[test]
fn formatted_first_month_uses_table_position_zero() {
    let date = EthiopianDate::new(2016, 1, 1).unwrap();
    assert_eq!(format_ethiopian(&date), "2016 Meskerem 1");
    assert_eq!(date.to_string(), "2016 Meskerem 1");
}

#[test]
fn packed_forms_match_scalar_form() {
    let scalar = to_gregorian(2016, 4, 29).unwrap();
    let array = EthiopianDate::try_from([2016, 4, 29]).unwrap().to_gregorian().unwrap();
    let parts = ethiocal::to_gregorian_parts(&[Some(2016), Some(4), Some(29)]).unwrap();
    let json: EthiopianDate = serde_json::from_str("[2016, 4, 29]").unwrap();
    assert_eq!(scalar, array);
    assert_eq!(scalar, parts);
    assert_eq!(scalar, json.to_gregorian().unwrap());
}

//! ethiocal - Ethiopian and Gregorian calendar conversion
//!
//! Converts `(year, month, day)` triples between the Ethiopian calendar
//! (twelve 30-day months and a 5 or 6 day Pagume) and the proleptic
//! Gregorian calendar, honouring the October 1582 reform gap.
//!
//! # Quick Start
//!
//! ```
//! use ethiocal::{format_ethiopian, to_ethiopian, to_gregorian};
//!
//! let gregorian = to_gregorian(2016, 1, 1).unwrap();
//! assert_eq!(gregorian.to_string(), "2023-09-12");
//!
//! let ethiopian = to_ethiopian(2000, 1, 1).unwrap();
//! assert_eq!(format_ethiopian(&ethiopian), "1992 Tahsas 22");
//! ```
//!
//! The `ethiocal` binary in `crates/cli` exposes the same operations on the
//! command line.

// Re-export the public API from ethiocal-core
pub use ethiocal_core::*;

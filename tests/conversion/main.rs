//! Conversion Tests
//!
//! End-to-end tests of the public API organized by concern:
//! - Fixed points: known dates in both calendars
//! - Day stepping: consecutive days stay consecutive across both calendars
//! - Round trips: property tests over the post-reform range
//! - Errors: rejected input and the reform gap

#[path = "../common/mod.rs"]
mod common;

mod day_stepping;
mod errors;
mod fixed_points;
mod round_trip;

//! Civil date-time handling for the saju engine.
//!
//! This crate provides:
//! - `CivilDateTime`, a minute-precision Gregorian date-time parsed from
//!   `YYYY-MM-DD HH:MM`
//! - `days_between`, the exact whole-day difference between two dates
//!
//! All calendar arithmetic is delegated to `chrono`'s proleptic Gregorian
//! calendar.

pub mod civil;
pub mod days;
pub mod error;

pub use chrono::NaiveDate;
pub use civil::{BIRTH_FORMAT, CivilDateTime, MAX_YEAR, MIN_YEAR};
pub use days::days_between;
pub use error::TimeError;

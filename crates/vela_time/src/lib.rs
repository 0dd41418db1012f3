//! Civil time handling for panchang computation.
//!
//! This crate provides:
//! - `LocalMoment`, a validated civil date-time with a fixed UTC offset
//! - Julian Date conversions (calendar <-> JD, UT)
//! - Day-of-year and leap-year helpers
//!
//! All downstream astronomy works in JD UT; local civil time exists only
//! at the input and output boundaries.

pub mod error;
pub mod julian;
pub mod moment;

pub use error::TimeError;
pub use julian::{calendar_to_jd, day_of_year, is_leap_year, jd_to_calendar};
pub use moment::{LocalMoment, hours_to_hms};

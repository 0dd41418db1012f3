//! Solar/lunar positional quantities for panchang computation.
//!
//! This crate provides:
//! - Sunrise/sunset/solar-noon from the declination/hour-angle approximation
//! - Geocentric ecliptic longitude of the Sun and Moon (truncated series)
//! - Lahiri ayanamsha for sidereal longitudes
//!
//! All implementations are clean-room, derived from public astronomical
//! formulas (Meeus, Cooper, NOAA). Accuracy is arcminute-level, which is
//! sufficient for minute-resolution panchang output.

pub mod ayanamsha;
pub mod error;
pub mod location;
pub mod lunar;
pub mod solar;

pub use ayanamsha::{ayanamsha_deg, jd_ut_to_centuries};
pub use error::EphemError;
pub use location::GeoLocation;
pub use lunar::moon_tropical_longitude_deg;
pub use solar::{
    DayKind, SunCycle, SunriseConfig, equation_of_time_min, solar_declination_deg,
    sun_cycle_for_date, sun_tropical_longitude_deg,
};

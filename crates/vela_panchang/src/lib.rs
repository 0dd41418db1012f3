//! Panchang time-window calculator.
//!
//! A stateless three-stage pipeline:
//! 1. Ephemeris input resolver: civil moment + location -> sunrise/sunset,
//!    solar noon, Sun/Moon ecliptic longitudes ([`resolve`]).
//! 2. Classification and window derivation: tithi/nakshatra/yoga/karana
//!    with boundary times, and the five named muhurta/kaal windows
//!    ([`elements`], [`windows`], [`calendar`]).
//! 3. Response formatter: the externally documented JSON shape
//!    ([`response`]).
//!
//! Every invocation is an independent pure computation; identical input
//! yields bit-identical output.

pub mod calendar;
pub mod elements;
pub mod error;
pub mod request;
pub mod resolve;
pub mod response;
pub(crate) mod search_util;
pub mod windows;

pub use calendar::{MasaInfo, VedicYearInfo, masa_for_moment, vedic_year_for_moment};
pub use elements::{
    KaranaEntry, NakshatraInfo, TithiInfo, YogaEntry, karanas_for_day, nakshatra_at, tithi_at,
    yogas_for_day,
};
pub use error::PanchangError;
pub use request::PanchangRequest;
pub use resolve::{SolarLunarPosition, elongation_at, moon_sidereal_at, resolve, sun_sidereal_at};
pub use response::{PanchangResponse, compute_panchang};
pub use windows::{DayWindows, KaalCategory, Window, derive_windows};

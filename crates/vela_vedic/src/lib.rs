//! Fixed Vedic calendar tables and modular arithmetic.
//!
//! This crate provides the pure classification layer of the panchang:
//! - Tithi, Nakshatra, Yoga, Karana from ecliptic longitudes
//! - Vaar (weekday), Masa (lunar month), Ritu, Ayana, Samvatsara
//! - The weekday-indexed kaal start-slot tables (Rahu, Yamaganda, Gulika)
//!
//! Everything here is a total function of its numeric inputs; no I/O,
//! no ephemeris queries. Clean-room from universal Vedic convention.

pub mod kaal;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use kaal::{
    ABHIJIT_HALF_SPAN_MIN, ALL_KAALS, BRAHMA_MUHURTA_BEFORE_SUNRISE_MIN, DAY_SLICES, KaalKind,
};
pub use karana::{KARANA_SEGMENT_DEG, KaranaPos, karana_from_elongation, karana_name};
pub use masa::{Ayana, Masa, Ritu, ayana_from_sidereal_longitude, masa_from_rashi_index, rashi_index_from_longitude, ritu_from_masa_number};
pub use nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPos, nakshatra_from_longitude};
pub use samvatsara::{SAMVATSARA_EPOCH_YEAR, samvatsara_for_year};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPos, tithi_from_elongation, tithi_name};
pub use util::{normalize_360, normalize_to_pm180};
pub use vaar::{Vaar, vaar_from_jd};
pub use yoga::{YOGA_SEGMENT_DEG, Yoga, YogaPos, yoga_from_sum};

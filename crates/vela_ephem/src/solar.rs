//! Sunrise/sunset approximation and solar ecliptic longitude.
//!
//! Rise/set uses the declination/hour-angle method: Cooper's declination
//! formula, `cos H = (sin h0 - sin(lat) sin(decl)) / (cos(lat) cos(decl))`,
//! and a longitude correction against the timezone reference meridian.
//! With the default zero depression this reduces to the classic
//! `H = acos(-tan(lat) tan(decl))`.
//!
//! Solar longitude uses the truncated Meeus series (Astronomical
//! Algorithms ch. 25), good to well under an arcminute over +-2 centuries.

use std::f64::consts::TAU;

use crate::location::GeoLocation;

/// Degrees per hour of Earth rotation.
const DEG_PER_HOUR: f64 = 15.0;

/// Classification of the solar day at the observer's latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Sun rises and sets normally.
    Normal,
    /// Sun never sets (midnight sun). Rise/set clamped to noon +- 12h.
    PolarDay,
    /// Sun never rises (polar night). Rise/set clamped to noon.
    PolarNight,
}

/// Configurable parameters for the rise/set approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseConfig {
    /// Horizon depression in degrees (refraction + semidiameter).
    /// Default 0.0: the pure geometric `-tan(lat) tan(decl)` form.
    pub depression_deg: f64,
}

impl Default for SunriseConfig {
    fn default() -> Self {
        Self {
            depression_deg: 0.0,
        }
    }
}

/// Sunrise/sunset/solar-noon for one observer day, in local clock hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCycle {
    /// Sunrise in local decimal hours.
    pub sunrise_h: f64,
    /// Sunset in local decimal hours.
    pub sunset_h: f64,
    /// Solar noon (meridian transit) in local decimal hours.
    pub solar_noon_h: f64,
    /// Normal, polar day, or polar night.
    pub day_kind: DayKind,
}

impl SunCycle {
    /// Daylight duration in decimal hours.
    pub fn day_duration_h(&self) -> f64 {
        self.sunset_h - self.sunrise_h
    }
}

/// Cooper's solar declination in degrees for a 1-based day of year.
///
/// `decl = 23.45 * sin(2 pi (284 + N) / 365)`
pub fn solar_declination_deg(day_of_year: u32) -> f64 {
    23.45 * (TAU * (284.0 + day_of_year as f64) / 365.0).sin()
}

/// Equation of time in minutes for a 1-based day of year.
///
/// `B = 2 pi (N - 81) / 364`; positive means the sundial is ahead of the clock.
pub fn equation_of_time_min(day_of_year: u32) -> f64 {
    let b = TAU * (day_of_year as f64 - 81.0) / 364.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Compute sunrise, sunset, and solar noon in local clock hours.
///
/// `utc_offset_hours` fixes the timezone reference meridian at
/// `15 * offset` degrees; the longitude correction term
/// `(longitude - reference) / 15` shifts solar noon accordingly.
///
/// Degenerate polar cases (|cos H| > 1) are clamped: polar night yields
/// sunrise = sunset = noon, midnight sun yields noon -+ 12h. The returned
/// `day_kind` reports which case occurred.
pub fn sun_cycle_for_date(
    day_of_year: u32,
    location: &GeoLocation,
    utc_offset_hours: f64,
    config: &SunriseConfig,
) -> SunCycle {
    let decl_rad = solar_declination_deg(day_of_year).to_radians();
    let phi = location.latitude_rad();

    let reference_meridian = DEG_PER_HOUR * utc_offset_hours;
    let longitude_correction_h = (location.longitude_deg - reference_meridian) / DEG_PER_HOUR;
    let solar_noon_h = 12.0 - longitude_correction_h - equation_of_time_min(day_of_year) / 60.0;

    let h0_rad = (-config.depression_deg).to_radians();
    let cos_h = (h0_rad.sin() - phi.sin() * decl_rad.sin()) / (phi.cos() * decl_rad.cos());

    if cos_h > 1.0 {
        return SunCycle {
            sunrise_h: solar_noon_h,
            sunset_h: solar_noon_h,
            solar_noon_h,
            day_kind: DayKind::PolarNight,
        };
    }
    if cos_h < -1.0 {
        return SunCycle {
            sunrise_h: solar_noon_h - 12.0,
            sunset_h: solar_noon_h + 12.0,
            solar_noon_h,
            day_kind: DayKind::PolarDay,
        };
    }

    let half_day_h = cos_h.acos().to_degrees() / DEG_PER_HOUR;
    SunCycle {
        sunrise_h: solar_noon_h - half_day_h,
        sunset_h: solar_noon_h + half_day_h,
        solar_noon_h,
        day_kind: DayKind::Normal,
    }
}

/// Normalize an angle to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Sun's geocentric tropical ecliptic longitude in degrees [0, 360).
///
/// Truncated Meeus series: mean longitude + equation of center.
pub fn sun_tropical_longitude_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - 2_451_545.0) / 36_525.0;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m_deg = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m = m_deg.to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    normalize_360(l0 + c)
}

//! Ephemeris input resolver.
//!
//! Turns a validated request into every raw astronomical quantity the
//! later stages read: the local sun cycle (sunrise, sunset, solar noon)
//! and the Sun/Moon ecliptic longitudes at the observation instant.

use vela_ephem::{
    SunCycle, ayanamsha_deg, jd_ut_to_centuries, moon_tropical_longitude_deg,
    sun_cycle_for_date, sun_tropical_longitude_deg,
};
use vela_vedic::normalize_360;

use crate::request::PanchangRequest;

/// Resolved astronomical inputs for one observation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLunarPosition {
    /// Sunrise, sunset, and solar noon of the observation date.
    pub cycle: SunCycle,
    /// Julian Date (UT) of the observation instant.
    pub jd_ut: f64,
    /// Julian Date (UT) of local midnight on the observation date.
    pub midnight_jd_ut: f64,
    /// Sun's tropical ecliptic longitude, degrees [0, 360).
    pub sun_tropical_deg: f64,
    /// Moon's tropical ecliptic longitude, degrees [0, 360).
    pub moon_tropical_deg: f64,
    /// Lahiri ayanamsha at the observation instant, degrees.
    pub ayanamsha_deg: f64,
}

impl SolarLunarPosition {
    /// Sun's sidereal longitude, degrees [0, 360).
    pub fn sun_sidereal_deg(&self) -> f64 {
        normalize_360(self.sun_tropical_deg - self.ayanamsha_deg)
    }

    /// Moon's sidereal longitude, degrees [0, 360).
    pub fn moon_sidereal_deg(&self) -> f64 {
        normalize_360(self.moon_tropical_deg - self.ayanamsha_deg)
    }

    /// Moon-minus-Sun elongation, degrees [0, 360). Ayanamsha cancels,
    /// so tropical longitudes are used directly.
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.moon_tropical_deg - self.sun_tropical_deg)
    }

    /// Sidereal Sun + Moon longitude sum, degrees [0, 360).
    pub fn sidereal_sum_deg(&self) -> f64 {
        normalize_360(self.sun_sidereal_deg() + self.moon_sidereal_deg())
    }

    /// Julian Date (UT) of sunrise on the observation date.
    pub fn sunrise_jd_ut(&self) -> f64 {
        self.midnight_jd_ut + self.cycle.sunrise_h / 24.0
    }

    /// Julian Date (UT) of sunset on the observation date.
    pub fn sunset_jd_ut(&self) -> f64 {
        self.midnight_jd_ut + self.cycle.sunset_h / 24.0
    }
}

/// Moon-minus-Sun elongation at an arbitrary instant, degrees [0, 360).
pub fn elongation_at(jd_ut: f64) -> f64 {
    normalize_360(moon_tropical_longitude_deg(jd_ut) - sun_tropical_longitude_deg(jd_ut))
}

/// Sun's sidereal longitude at an arbitrary instant, degrees [0, 360).
pub fn sun_sidereal_at(jd_ut: f64) -> f64 {
    let t = jd_ut_to_centuries(jd_ut);
    normalize_360(sun_tropical_longitude_deg(jd_ut) - ayanamsha_deg(t))
}

/// Moon's sidereal longitude at an arbitrary instant, degrees [0, 360).
pub fn moon_sidereal_at(jd_ut: f64) -> f64 {
    let t = jd_ut_to_centuries(jd_ut);
    normalize_360(moon_tropical_longitude_deg(jd_ut) - ayanamsha_deg(t))
}

/// Sidereal Sun + Moon longitude sum at an arbitrary instant, degrees [0, 360).
pub(crate) fn sidereal_sum_at(jd_ut: f64) -> f64 {
    normalize_360(sun_sidereal_at(jd_ut) + moon_sidereal_at(jd_ut))
}

/// Resolve all astronomical inputs for a request.
pub fn resolve(request: &PanchangRequest) -> SolarLunarPosition {
    let moment = &request.moment;
    let cycle = sun_cycle_for_date(
        moment.day_of_year(),
        &request.location,
        moment.utc_offset_hours,
        &request.sunrise_config,
    );
    let jd_ut = moment.to_jd_ut();
    let t = jd_ut_to_centuries(jd_ut);
    SolarLunarPosition {
        cycle,
        jd_ut,
        midnight_jd_ut: moment.local_midnight_jd_ut(),
        sun_tropical_deg: sun_tropical_longitude_deg(jd_ut),
        moon_tropical_deg: moon_tropical_longitude_deg(jd_ut),
        ayanamsha_deg: ayanamsha_deg(t),
    }
}

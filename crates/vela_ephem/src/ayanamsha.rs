//! Lahiri (Chitrapaksha) ayanamsha, linear model.
//!
//! Single-system on purpose: panchang output here is Lahiri-based, the
//! de-facto standard of Indian civil almanacs. The linear model about
//! J2000 (23.853 deg + 50.29 arcsec/yr) tracks the full precession
//! series to within ~0.01 deg across 1900-2100.

/// Lahiri ayanamsha at J2000.0, degrees.
const LAHIRI_J2000_DEG: f64 = 23.853;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_042;

/// Julian centuries since J2000.0 for a JD UT.
pub fn jd_ut_to_centuries(jd_ut: f64) -> f64 {
    (jd_ut - 2_451_545.0) / 36_525.0
}

/// Lahiri ayanamsha in degrees at `t` Julian centuries since J2000.0.
pub fn ayanamsha_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + PRECESSION_DEG_PER_CENTURY * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((ayanamsha_deg(0.0) - 23.853).abs() < 1e-12);
    }

    #[test]
    fn year_2024_value() {
        // Lahiri in 2024 is ~24.19 deg
        let t = jd_ut_to_centuries(2_460_414.5);
        let aya = ayanamsha_deg(t);
        assert!((aya - 24.19).abs() < 0.05, "ayanamsha 2024 = {aya}");
    }

    #[test]
    fn increases_with_time() {
        assert!(ayanamsha_deg(1.0) > ayanamsha_deg(0.0));
    }
}

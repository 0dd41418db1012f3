//! Geographic location of the observer.

use crate::error::EphemError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        let loc = GeoLocation::new(17.385, 78.4867).unwrap();
        assert!((loc.latitude_rad() - 17.385_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn rejects_bad_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-90.5, 0.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn poles_are_valid() {
        assert!(GeoLocation::new(90.0, 0.0).is_ok());
        assert!(GeoLocation::new(-90.0, 180.0).is_ok());
    }
}

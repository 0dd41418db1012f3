//! Validated observation request.

use vela_ephem::{GeoLocation, SunriseConfig};
use vela_time::LocalMoment;

use crate::error::PanchangError;

/// One observation moment with its location: the validated form of the
/// nine required input fields. Constructed per request, discarded after
/// the response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangRequest {
    pub moment: LocalMoment,
    pub location: GeoLocation,
    pub sunrise_config: SunriseConfig,
}

impl PanchangRequest {
    /// Validate all nine input fields. Fails fast before any computation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: f64,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Result<Self, PanchangError> {
        let moment = LocalMoment::new(year, month, day, hours, minutes, seconds, timezone)?;
        let location = GeoLocation::new(latitude, longitude)?;
        Ok(Self {
            moment,
            location,
            sunrise_config: SunriseConfig::default(),
        })
    }

    /// Override the rise/set depression parameters.
    pub fn with_sunrise_config(mut self, config: SunriseConfig) -> Self {
        self.sunrise_config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_time::TimeError;

    #[test]
    fn valid_request() {
        let req = PanchangRequest::new(2024, 4, 14, 6, 0, 0.0, 17.385, 78.4867, 5.5).unwrap();
        assert_eq!(req.moment.day, 14);
        assert!((req.location.latitude_deg - 17.385).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_date_before_location() {
        let err = PanchangRequest::new(2024, 1, 32, 0, 0, 0.0, 999.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, PanchangError::Time(TimeError::InvalidDay(32)));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        assert!(PanchangRequest::new(2024, 1, 1, 0, 0, 0.0, 95.0, 0.0, 0.0).is_err());
        assert!(PanchangRequest::new(2024, 1, 1, 0, 0, 0.0, 0.0, 200.0, 0.0).is_err());
    }
}

//! Error types for panchang computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vela_ephem::EphemError;
use vela_time::TimeError;

/// Errors from panchang computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Error from civil time validation.
    Time(TimeError),
    /// Error from location validation or ephemeris resolution.
    Ephem(EphemError),
    /// Boundary search failed to bracket a crossing.
    NoConvergence(&'static str),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for PanchangError {}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemError> for PanchangError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}

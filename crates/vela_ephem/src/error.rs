//! Error types for ephemeris input resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vela_time::TimeError;

/// Errors from location validation or time conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Error from civil time validation.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for EphemError {}

impl From<TimeError> for EphemError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

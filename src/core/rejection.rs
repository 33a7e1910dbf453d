//! Typed reasons for refusing a punch.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rejection {
    /// ONSITE admission needs a location reading and none was available.
    LocationUnavailable,
    /// A location was given but it lies outside every configured geofence.
    OutsideGeofence,
    /// Punch-in requested while a session is already open.
    AlreadyPunchedIn,
    /// Punch-out requested with no open session.
    NoActiveSession,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::LocationUnavailable => "LOCATION_UNAVAILABLE",
            Rejection::OutsideGeofence => "OUTSIDE_GEOFENCE",
            Rejection::AlreadyPunchedIn => "ALREADY_PUNCHED_IN",
            Rejection::NoActiveSession => "NO_ACTIVE_SESSION",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rejection::LocationUnavailable => {
                "Unable to get your location. Please enable location services."
            }
            Rejection::OutsideGeofence => "You are not within the designated work location.",
            Rejection::AlreadyPunchedIn => "You are already punched in.",
            Rejection::NoActiveSession => "You are not punched in.",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message(), self.code())
    }
}

impl std::error::Error for Rejection {}

/// Outcome of an admission check. `reason` is set iff `allowed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdmissionResult {
    pub allowed: bool,
    pub reason: Option<Rejection>,
}

impl AdmissionResult {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn rejected(reason: Rejection) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    /// Turn the decision into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self.reason {
            Some(r) if !self.allowed => Err(r),
            _ => Ok(()),
        }
    }
}

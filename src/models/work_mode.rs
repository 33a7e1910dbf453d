use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-user attendance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkMode {
    /// Punch-in is gated by the configured geofences.
    #[default]
    Onsite,
    /// Punch-in is always admitted.
    Remote,
}

impl WorkMode {
    pub fn code(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "ONSITE",
            WorkMode::Remote => "REMOTE",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ONSITE" => Some(WorkMode::Onsite),
            "REMOTE" => Some(WorkMode::Remote),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        WorkMode::from_db_str(&code.trim().to_uppercase())
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

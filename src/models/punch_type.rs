use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PunchType {
    In,
    Out,
}

impl PunchType {
    /// Parse user input ("in", "IN", "Out", ...).
    pub fn pt_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::In => "in",
            PunchType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchType::In),
            "out" => Some(PunchType::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchType::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchType::Out)
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PunchType::In => write!(f, "IN"),
            PunchType::Out => write!(f, "OUT"),
        }
    }
}

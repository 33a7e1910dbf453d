use crate::utils::formatting::format_hm;
use serde::Serialize;

/// Worked time over a set of closed IN/OUT pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    pub total_minutes: i64,
    pub formatted: String,
}

impl DurationSummary {
    pub fn from_minutes(total_minutes: i64) -> Self {
        let total_minutes = total_minutes.max(0);
        Self {
            total_minutes,
            formatted: format_hm(total_minutes),
        }
    }
}

impl Default for DurationSummary {
    fn default() -> Self {
        Self::from_minutes(0)
    }
}

use super::{geo_point::GeoPoint, punch_type::PunchType};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One entry of the append-only attendance log.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PunchRecord {
    pub id: i64,                    // ⇔ punches.id
    pub user_id: String,            // ⇔ punches.user_id
    pub kind: PunchType,            // ⇔ punches.kind ('in' | 'out')
    pub timestamp: DateTime<Local>, // ⇔ punches.timestamp (TEXT, RFC 3339)
    pub location: GeoPoint,         // ⇔ punches.latitude / punches.longitude
    pub project_id: Option<String>, // ⇔ punches.project_id (NULL when unset)
    pub task_id: Option<String>,    // ⇔ punches.task_id (NULL when unset)
}

impl PunchRecord {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Punch request handed to the history store once local checks passed.
#[derive(Debug, Clone)]
pub struct NewPunch {
    pub user_id: String,
    pub kind: PunchType,
    pub timestamp: DateTime<Local>,
    pub location: GeoPoint,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
}

impl NewPunch {
    /// Stamp a punch with the current local time.
    pub fn now(
        user_id: &str,
        kind: PunchType,
        location: GeoPoint,
        project_id: Option<String>,
        task_id: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind,
            timestamp: Local::now(),
            location,
            project_id,
            task_id,
        }
    }
}

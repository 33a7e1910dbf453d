use crate::models::{punch::PunchRecord, session::WorkSession};
use serde::Serialize;

/// Flat punch row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub user_id: String,
    pub kind: String,
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
}

impl From<&PunchRecord> for PunchExport {
    fn from(p: &PunchRecord) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id.clone(),
            kind: p.kind.to_string(),
            timestamp: p.timestamp.to_rfc3339(),
            latitude: p.location.latitude,
            longitude: p.location.longitude,
            project_id: p.project_id.clone(),
            task_id: p.task_id.clone(),
        }
    }
}

/// Flat work-session row for CSV / JSON. `punch_out` is empty while open.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub punch_in_id: i64,
    pub date: String,
    pub punch_in: String,
    pub punch_out: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub duration_minutes: i64,
}

impl From<&WorkSession> for SessionExport {
    fn from(s: &WorkSession) -> Self {
        Self {
            punch_in_id: s.punch_in.id,
            date: s.punch_in.date_str(),
            punch_in: s.punch_in.timestamp.to_rfc3339(),
            punch_out: s.punch_out.as_ref().map(|o| o.timestamp.to_rfc3339()),
            project_id: s.punch_in.project_id.clone(),
            task_id: s.punch_in.task_id.clone(),
            duration_minutes: s.duration_minutes,
        }
    }
}

use super::punch::PunchRecord;
use chrono::{DateTime, Local};
use serde::Serialize;

/// The open interval anchored to the latest unmatched IN punch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub punch_in: PunchRecord,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn from_punch_in(punch_in: PunchRecord) -> Self {
        Self {
            project_id: punch_in.project_id.clone(),
            task_id: punch_in.task_id.clone(),
            started_at: punch_in.timestamp,
            punch_in,
        }
    }

    /// Whole minutes since punch-in; 0 if `now` precedes the start.
    pub fn elapsed_minutes(&self, now: DateTime<Local>) -> i64 {
        (now - self.started_at).num_minutes().max(0)
    }
}

/// An IN punch together with its OUT punch, if it has one yet.
#[derive(Debug, Clone, Serialize)]
pub struct WorkSession {
    pub punch_in: PunchRecord,
    pub punch_out: Option<PunchRecord>,
    pub duration_minutes: i64,
}

impl WorkSession {
    pub fn is_open(&self) -> bool {
        self.punch_out.is_none()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.punch_in.project_id.as_deref()
    }

    pub fn task_id(&self) -> Option<&str> {
        self.punch_in.task_id.as_deref()
    }
}

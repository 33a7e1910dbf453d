//! Attendance session state: admission, current session and worked time.
//!
//! Everything here is recomputed from a punch-history snapshot. Nothing is
//! cached between calls, so the same input always yields the same output.

use crate::core::geofence;
use crate::core::rejection::{AdmissionResult, Rejection};
use crate::models::{
    duration::DurationSummary, geo_point::GeoPoint, geofence::GeofenceRegion,
    punch::PunchRecord, punch_type::PunchType, session::Session, session::WorkSession,
    work_mode::WorkMode,
};
use std::collections::HashMap;

/// Decide whether a punch-in is admissible for the given work mode.
pub fn evaluate_admission(
    mode: WorkMode,
    point: Option<&GeoPoint>,
    regions: &[GeofenceRegion],
) -> AdmissionResult {
    match mode {
        WorkMode::Remote => AdmissionResult::allowed(),
        WorkMode::Onsite => match point {
            None => AdmissionResult::rejected(Rejection::LocationUnavailable),
            Some(p) if geofence::any_within(p, regions) => AdmissionResult::allowed(),
            Some(_) => AdmissionResult::rejected(Rejection::OutsideGeofence),
        },
    }
}

/// Copy of `records` in ascending timestamp order. Stable, so records with
/// equal timestamps keep their input order.
fn sorted_by_time(records: &[PunchRecord]) -> Vec<PunchRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|p| p.timestamp);
    sorted
}

/// The open session, if the latest IN has no later OUT.
///
/// Two INs in a row: the later one wins and the earlier is orphaned.
/// An OUT closes whatever IN is open, regardless of project or task.
pub fn derive_current_session(history: &[PunchRecord]) -> Option<Session> {
    let sorted = sorted_by_time(history);

    let mut open: Option<&PunchRecord> = None;
    for punch in &sorted {
        match punch.kind {
            PunchType::In => open = Some(punch),
            PunchType::Out => open = None,
        }
    }

    open.cloned().map(Session::from_punch_in)
}

/// Pair every IN with the next OUT of the same user.
///
/// Returned in IN order. Open sessions (no OUT yet) are included with a
/// zero duration; orphaned INs and OUTs with nothing to close are dropped.
pub fn build_work_sessions(records: &[PunchRecord]) -> Vec<WorkSession> {
    let sorted = sorted_by_time(records);

    let mut open: HashMap<String, PunchRecord> = HashMap::new();
    let mut sessions = Vec::new();

    for punch in sorted {
        match punch.kind {
            PunchType::In => {
                open.insert(punch.user_id.clone(), punch);
            }
            PunchType::Out => {
                if let Some(punch_in) = open.remove(&punch.user_id) {
                    let duration = (punch.timestamp - punch_in.timestamp).num_minutes().max(0);
                    sessions.push(WorkSession {
                        punch_in,
                        punch_out: Some(punch),
                        duration_minutes: duration,
                    });
                }
            }
        }
    }

    sessions.extend(open.into_values().map(|punch_in| WorkSession {
        punch_in,
        punch_out: None,
        duration_minutes: 0,
    }));

    sessions.sort_by_key(|s| s.punch_in.timestamp);
    sessions
}

/// Worked time over the closed pairs whose IN is accepted by `predicate`.
///
/// Pairing runs over the whole history first, so the OUT of a selected pair
/// counts even when it falls on another day or carries no project. An IN
/// still waiting for its OUT adds nothing.
pub fn compute_duration<F>(records: &[PunchRecord], predicate: F) -> DurationSummary
where
    F: Fn(&PunchRecord) -> bool,
{
    let total: i64 = build_work_sessions(records)
        .iter()
        .filter(|s| !s.is_open() && predicate(&s.punch_in))
        .map(|s| s.duration_minutes)
        .sum();

    DurationSummary::from_minutes(total)
}

/// Punch-in is only possible from IDLE.
pub fn check_punch_in(current: Option<&Session>) -> Result<(), Rejection> {
    match current {
        Some(_) => Err(Rejection::AlreadyPunchedIn),
        None => Ok(()),
    }
}

/// Punch-out is only possible from ACTIVE; returns the session being closed.
pub fn check_punch_out(current: Option<&Session>) -> Result<&Session, Rejection> {
    current.ok_or(Rejection::NoActiveSession)
}

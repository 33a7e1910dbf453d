use crate::core::ports::{AttendanceHistoryStore, GeofenceDirectory, LocationProvider};
use crate::core::rejection::Rejection;
use crate::core::tracker;
use crate::errors::{AppError, AppResult};
use crate::models::{
    punch::NewPunch, punch::PunchRecord, punch_type::PunchType, session::Session,
    work_mode::WorkMode,
};

/// Options for a punch-in request.
#[derive(Debug, Clone, Default)]
pub struct PunchInRequest {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub require_project: bool,
}

/// High-level business logic for the `punch` command.
///
/// Runs the local checks in the same order as the attendance screen:
/// location, geofence admission, session state, project selection. Only
/// then is the store asked to record the punch.
pub struct PunchLogic;

impl PunchLogic {
    pub fn punch_in<S, L>(
        store: &S,
        location: &L,
        user_id: &str,
        mode: WorkMode,
        request: PunchInRequest,
    ) -> AppResult<PunchRecord>
    where
        S: GeofenceDirectory + AttendanceHistoryStore,
        L: LocationProvider,
    {
        // A punch always carries a position, whatever the work mode.
        let point = location
            .current_location()
            .ok_or(Rejection::LocationUnavailable)?;

        let regions = store.list_all()?;
        tracker::evaluate_admission(mode, Some(&point), &regions).into_result()?;

        let history = store.history(user_id)?;
        let current = tracker::derive_current_session(&history);
        tracker::check_punch_in(current.as_ref())?;

        let project_id = request.project_id.filter(|p| !p.trim().is_empty());
        let task_id = request.task_id.filter(|t| !t.trim().is_empty());
        if request.require_project && project_id.is_none() {
            return Err(AppError::MissingProject);
        }

        store.record_punch(NewPunch::now(
            user_id,
            PunchType::In,
            point,
            project_id,
            task_id,
        ))
    }

    /// Close the open session. The OUT punch inherits its project and task.
    pub fn punch_out<S, L>(store: &S, location: &L, user_id: &str) -> AppResult<(Session, PunchRecord)>
    where
        S: AttendanceHistoryStore,
        L: LocationProvider,
    {
        let point = location
            .current_location()
            .ok_or(Rejection::LocationUnavailable)?;

        let history = store.history(user_id)?;
        let current = tracker::derive_current_session(&history);
        let session = tracker::check_punch_out(current.as_ref())?.clone();

        let out = store.record_punch(NewPunch::now(
            user_id,
            PunchType::Out,
            point,
            session.project_id.clone(),
            session.task_id.clone(),
        ))?;

        Ok((session, out))
    }

    /// Current session for `user_id`, recomputed from the stored history.
    pub fn current_session<S>(store: &S, user_id: &str) -> AppResult<Option<Session>>
    where
        S: AttendanceHistoryStore,
    {
        let history = store.history(user_id)?;
        Ok(tracker::derive_current_session(&history))
    }
}

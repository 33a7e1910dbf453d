use crate::core::filters;
use crate::core::ports::AttendanceHistoryStore;
use crate::core::tracker;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{PunchExport, SessionExport};
use crate::export::range::parse_range;
use crate::models::punch::PunchRecord;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

fn write_rows<T: Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

impl ExportLogic {
    /// Export the punches (or, with `sessions`, the paired work sessions)
    /// of `user_id`.
    ///
    /// `range` is `None`, `"all"`, or anything `parse_range` accepts. For
    /// sessions the range selects on the punch-in day.
    pub fn export<S: AttendanceHistoryStore>(
        store: &S,
        user_id: &str,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        sessions: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let history = store.history(user_id)?;

        let rows = if sessions {
            let exported: Vec<SessionExport> = tracker::build_work_sessions(&history)
                .iter()
                .filter(|s| bounds.is_none_or(|(from, to)| filters::between(from, to)(&s.punch_in)))
                .map(SessionExport::from)
                .collect();
            if exported.is_empty() {
                warning("No work sessions found for the selected range.");
                return Ok(0);
            }
            ensure_writable(path, force)?;
            write_rows(format, &exported, path)?;
            exported.len()
        } else {
            let selected: Vec<&PunchRecord> = history
                .iter()
                .filter(|p| bounds.is_none_or(|(from, to)| filters::between(from, to)(*p)))
                .collect();
            if selected.is_empty() {
                warning("No punches found for the selected range.");
                return Ok(0);
            }
            let exported: Vec<PunchExport> = selected.into_iter().map(PunchExport::from).collect();
            ensure_writable(path, force)?;
            write_rows(format, &exported, path)?;
            exported.len()
        };

        Ok(rows)
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::{for_project, on_day};
use crate::core::ports::AttendanceHistoryStore;
use crate::core::tracker;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Hours { date, project } = cmd else {
        return Ok(());
    };

    let store = SqliteStore::open(&cfg.database)?;
    let history = store.history(&cfg.user_id)?;

    let (label, summary) = match project {
        Some(p) => (
            format!("project {}", p),
            tracker::compute_duration(&history, for_project(p)),
        ),
        None => {
            let day = match date {
                Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
                None => today(),
            };
            (
                day.format("%Y-%m-%d").to_string(),
                tracker::compute_duration(&history, on_day(day)),
            )
        }
    };

    println!(
        "⏱️  Hours for {}: {} ({} min)",
        label, summary.formatted, summary.total_minutes
    );
    Ok(())
}

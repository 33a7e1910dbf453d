use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::{group_by_day, of_kind, on_day};
use crate::core::ports::AttendanceHistoryStore;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchRecord;
use crate::models::punch_type::PunchType;
use crate::ui::messages::info;
use crate::utils::colors::colorize_punch;
use crate::utils::date::{day_heading, parse_date};
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History { date, kind } = cmd else {
        return Ok(());
    };

    let day = match date {
        Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
        None => None,
    };
    let kind = match kind {
        Some(k) => Some(PunchType::pt_from_str(k).ok_or_else(|| AppError::InvalidPunchType(k.clone()))?),
        None => None,
    };

    let store = SqliteStore::open(&cfg.database)?;
    let history = store.history(&cfg.user_id)?;

    let filtered: Vec<PunchRecord> = history
        .into_iter()
        .filter(|p| day.is_none_or(|d| on_day(d)(p)))
        .filter(|p| kind.is_none_or(|k| of_kind(k)(p)))
        .collect();

    if filtered.is_empty() {
        info("No records match your filter criteria.");
        return Ok(());
    }

    for (day, punches) in group_by_day(&filtered).iter().rev() {
        println!("\n📅 {}", day_heading(day));

        let mut table = Table::new(&["ID", "Time", "Type", "Project", "Task", "Location"]);
        for p in punches {
            table.add_row(vec![
                p.id.to_string(),
                p.time_str(),
                colorize_punch(&p.kind.to_string(), p.kind.is_in()),
                or_dash(p.project_id.as_deref()),
                or_dash(p.task_id.as_deref()),
                p.location.to_string(),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}

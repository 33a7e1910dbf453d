use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ports::AttendanceHistoryStore;
use crate::core::tracker;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{format_hm, or_dash};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Sessions { limit } = cmd else {
        return Ok(());
    };

    let store = SqliteStore::open(&cfg.database)?;
    let history = store.history(&cfg.user_id)?;
    let sessions = tracker::build_work_sessions(&history);

    if sessions.is_empty() {
        info("No work sessions yet.");
        return Ok(());
    }

    println!("🕘 Recent work sessions:\n");

    let mut table = Table::new(&["Date", "In", "Out", "Project", "Task", "Duration"]);
    for s in sessions.iter().rev().take(*limit) {
        let out = match &s.punch_out {
            Some(o) => o.time_str(),
            None => "open".to_string(),
        };
        table.add_row(vec![
            s.punch_in.date_str(),
            s.punch_in.time_str(),
            out,
            or_dash(s.project_id()),
            or_dash(s.task_id()),
            colorize_optional(&format_hm(s.duration_minutes)),
        ]);
    }
    print!("{}", table.render(&cfg.separator_char));

    Ok(())
}

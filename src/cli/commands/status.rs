use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::on_day;
use crate::core::location::FixedLocation;
use crate::core::ports::{AttendanceHistoryStore, GeofenceDirectory, LocationProvider};
use crate::core::tracker;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::work_mode::WorkMode;
use crate::ui::messages::{denied, header, success};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, colorize_optional};
use crate::utils::date::today;
use crate::utils::formatting::{format_hm, or_dash};
use crate::utils::geo::optional_point;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status { location } = cmd else {
        return Ok(());
    };

    let store = SqliteStore::open(&cfg.database)?;
    let mode = store.work_mode(&cfg.user_id, cfg.default_work_mode)?;
    let history = store.history(&cfg.user_id)?;
    let now = Local::now();

    header(format!("Attendance for {}", cfg.user_id));
    println!("{CYAN}• Work mode:{RESET} {}", mode);

    match tracker::derive_current_session(&history) {
        Some(session) => {
            println!("{CYAN}• Status:{RESET} {GREEN}ACTIVE{RESET}");
            println!(
                "{CYAN}• Punched in:{RESET} {}",
                session.started_at.format("%Y-%m-%d %H:%M")
            );
            println!(
                "{CYAN}• Project:{RESET} {}",
                colorize_optional(&or_dash(session.project_id.as_deref()))
            );
            println!(
                "{CYAN}• Task:{RESET} {}",
                colorize_optional(&or_dash(session.task_id.as_deref()))
            );
            println!(
                "{CYAN}• Elapsed:{RESET} {}",
                format_hm(session.elapsed_minutes(now))
            );
        }
        None => println!("{CYAN}• Status:{RESET} {GREY}IDLE{RESET}"),
    }

    let today_hours = tracker::compute_duration(&history, on_day(today()));
    println!(
        "{CYAN}• Today's hours:{RESET} {}",
        colorize_optional(&today_hours.formatted)
    );

    if mode == WorkMode::Onsite {
        let reading = FixedLocation::resolve(
            optional_point(location.lat, location.lon)?,
            cfg.default_location,
        );
        let point = reading.current_location();
        let regions = store.list_all()?;
        match tracker::evaluate_admission(mode, point.as_ref(), &regions).reason {
            Some(r) => denied(&r),
            None => success("You are within a designated work location."),
        }
    }

    Ok(())
}

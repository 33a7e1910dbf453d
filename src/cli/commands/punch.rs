use crate::cli::parser::{Commands, PunchAction};
use crate::config::Config;
use crate::core::location::FixedLocation;
use crate::core::punch::{PunchInRequest, PunchLogic};
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::{format_hm, or_dash};
use crate::utils::geo::optional_point;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Punch { action } = cmd else {
        return Ok(());
    };

    let store = SqliteStore::open(&cfg.database)?;

    match action {
        PunchAction::In {
            project,
            task,
            location,
        } => {
            let reading = FixedLocation::resolve(
                optional_point(location.lat, location.lon)?,
                cfg.default_location,
            );
            let mode = store.work_mode(&cfg.user_id, cfg.default_work_mode)?;

            let record = PunchLogic::punch_in(
                &store,
                &reading,
                &cfg.user_id,
                mode,
                PunchInRequest {
                    project_id: project.clone(),
                    task_id: task.clone(),
                    require_project: cfg.require_project,
                },
            )?;

            log::audit_or_warn(
                store.conn(),
                "punch_in",
                &cfg.user_id,
                &format!(
                    "#{} at {} project={} task={}",
                    record.id,
                    record.location,
                    or_dash(record.project_id.as_deref()),
                    or_dash(record.task_id.as_deref())
                ),
            );
            success(format!(
                "Punched in at {} ({}).",
                record.time_str(),
                or_dash(record.project_id.as_deref())
            ));
        }

        PunchAction::Out { location } => {
            let reading = FixedLocation::resolve(
                optional_point(location.lat, location.lon)?,
                cfg.default_location,
            );

            let (session, out) = PunchLogic::punch_out(&store, &reading, &cfg.user_id)?;
            let worked = session.elapsed_minutes(out.timestamp);

            log::audit_or_warn(
                store.conn(),
                "punch_out",
                &cfg.user_id,
                &format!("#{} closes #{} after {} min", out.id, session.punch_in.id, worked),
            );
            success(format!(
                "Punched out at {} after {} ({}).",
                out.time_str(),
                format_hm(worked),
                or_dash(session.project_id.as_deref())
            ));
        }
    }

    Ok(())
}

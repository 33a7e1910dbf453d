use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::work_mode::WorkMode;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mode { mode } = cmd {
        let store = SqliteStore::open(&cfg.database)?;

        match mode {
            None => {
                let current = store.work_mode(&cfg.user_id, cfg.default_work_mode)?;
                info(format!("Work mode for '{}': {}", cfg.user_id, current));
            }
            Some(code) => {
                let new_mode = WorkMode::from_code(code)
                    .ok_or_else(|| AppError::InvalidWorkMode(format!("'{}' (use ONSITE or REMOTE)", code)))?;
                store.set_work_mode(&cfg.user_id, new_mode)?;
                log::audit_or_warn(store.conn(), "work_mode", &cfg.user_id, new_mode.code());
                success(format!("Work mode for '{}' set to {}.", cfg.user_id, new_mode));
            }
        }
    }

    Ok(())
}

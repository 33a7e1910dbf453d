use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        sessions,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        ExportLogic::export(
            &store,
            &cfg.user_id,
            *format,
            file,
            range.as_deref(),
            *sessions,
            *force,
        )?;
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        all_owners,
        force,
    } = cmd
    {
        let tz = cfg.time_zone()?;
        let pool = DbPool::new(&cfg.database)?;
        let owner = if *all_owners {
            None
        } else {
            Some(cfg.owner_id.as_str())
        };

        ExportLogic::export(
            &pool,
            *format,
            file,
            range.as_deref(),
            owner,
            tz,
            Utc::now(),
            *force,
        )?;
    }
    Ok(())
}

use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::live::LiveLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch, ticks, at } = cmd {
        let tz = cfg.time_zone()?;
        let pool = DbPool::new(&cfg.database)?;

        if *watch {
            let interval = Duration::from_secs(cfg.refresh_interval_secs.max(1));
            LiveLogic::watch(&pool, &cfg.owner_id, tz, interval, *ticks)?;
        } else {
            let now = resolve_now(at.as_deref(), tz)?;
            LiveLogic::show(&pool, &cfg.owner_id, tz, now)?;
        }
    }
    Ok(())
}

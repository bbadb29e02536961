use super::{resolve_now, separator_char};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, at } = cmd {
        let tz = cfg.time_zone()?;
        let now = resolve_now(at.as_deref(), tz)?;
        ReportLogic::report(&expand_tilde(file), tz, now, separator_char(cfg))?;
    }
    Ok(())
}

pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod status;

use crate::errors::AppResult;
use crate::utils::time::parse_instant;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The instant a command acts on: `--at` when given, otherwise the system clock.
pub(crate) fn resolve_now(at: Option<&str>, tz: Tz) -> AppResult<DateTime<Utc>> {
    match at {
        Some(s) => parse_instant(s, tz),
        None => Ok(Utc::now()),
    }
}

/// First character of the configured separator.
pub(crate) fn separator_char(cfg: &crate::config::Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

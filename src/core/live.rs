//! Live status display for the owner's open session.
//!
//! The ledger is stateless; the ticking display is just this loop calling
//! it again with a fresh "now" every refresh interval.

use crate::core::clock::ClockLogic;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_latest_session;
use crate::errors::AppResult;
use crate::models::session_status::{ClockAction, next_actions};
use crate::ui::messages::status_line;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::{format_duration, secs2clock};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::thread;
use std::time::Duration;

fn actions_label(actions: &[ClockAction]) -> String {
    actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One status line for `owner_id` as of `now`.
pub fn render_status(pool: &DbPool, owner_id: &str, tz: Tz, now: DateTime<Utc>) -> AppResult<String> {
    let Some((row, status)) = ClockLogic::current_status(pool, owner_id, now)? else {
        let next = actions_label(next_actions(None));

        return Ok(match load_latest_session(&pool.conn, owner_id)? {
            Some(last) => {
                let summary = Core::build_session_summary(&last.session, tz, now);
                format!(
                    "No active session for {owner_id} | Last: {} until {} | Next: {next}",
                    summary.net_display,
                    summary.clock_out_local.as_deref().unwrap_or("--")
                )
            }
            None => format!("No active session for {owner_id} | Next: {next}"),
        });
    };

    let summary = Core::build_session_summary(&row.session, tz, now);

    Ok(format!(
        "{} | Net {} ({}) | Breaks {} | Since {} | Next: {}",
        colorize_status(status),
        secs2clock(summary.net_seconds),
        summary.net_display,
        format_duration(summary.break_seconds),
        summary.clock_in_local.as_deref().unwrap_or("--"),
        actions_label(next_actions(Some(status)))
    ))
}

pub struct LiveLogic;

impl LiveLogic {
    /// Print the status once.
    pub fn show(pool: &DbPool, owner_id: &str, tz: Tz, now: DateTime<Utc>) -> AppResult<()> {
        println!("{}", render_status(pool, owner_id, tz, now)?);
        Ok(())
    }

    /// Refresh the status line every `interval` until `ticks` lines were
    /// printed (forever when `ticks` is None).
    pub fn watch(pool: &DbPool, owner_id: &str, tz: Tz, interval: Duration, ticks: Option<u64>) -> AppResult<()> {
        let mut printed = 0u64;

        loop {
            status_line(render_status(pool, owner_id, tz, Utc::now())?);
            printed += 1;

            if ticks.is_some_and(|max| printed >= max) {
                println!();
                return Ok(());
            }

            thread::sleep(interval);
        }
    }
}

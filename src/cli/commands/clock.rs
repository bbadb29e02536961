use super::resolve_now;
use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::to_local_string;

/// Handle `in`, `break start|end` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let tz = cfg.time_zone()?;
    let owner = cfg.owner_id.as_str();
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::In { at } => {
            let now = resolve_now(at.as_deref(), tz)?;
            let row = ClockLogic::clock_in(&mut pool, owner, now)?;
            success(format!(
                "🟢 {owner} clocked in at {} (session {})",
                to_local_string(&now, tz),
                row.id
            ));
        }

        Commands::Break { action } => {
            let (at, started) = match action {
                BreakAction::Start { at } => (at, true),
                BreakAction::End { at } => (at, false),
            };
            let now = resolve_now(at.as_deref(), tz)?;

            if started {
                let row = ClockLogic::start_break(&mut pool, owner, now)?;
                success(format!(
                    "☕ Break started at {} (session {})",
                    to_local_string(&now, tz),
                    row.id
                ));
            } else {
                let row = ClockLogic::end_break(&mut pool, owner, now)?;
                let summary = Core::build_session_summary(&row.session, tz, now);
                success(format!(
                    "▶️  Break ended at {} | Net so far: {}",
                    to_local_string(&now, tz),
                    summary.net_display
                ));
            }
        }

        Commands::Out { at } => {
            let now = resolve_now(at.as_deref(), tz)?;
            let row = ClockLogic::clock_out(&mut pool, owner, now)?;
            let summary = Core::build_session_summary(&row.session, tz, now);
            success(format!(
                "🔴 {owner} clocked out at {} | Net: {}",
                to_local_string(&now, tz),
                summary.net_display
            ));
        }

        _ => {}
    }

    Ok(())
}

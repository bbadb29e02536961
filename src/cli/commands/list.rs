use super::{resolve_now, separator_char};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::summaries_table;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions;
use crate::errors::AppResult;
use crate::export::logic::filter_by_period;
use crate::models::work_session::WorkSession;
use crate::ui::messages::header;
use crate::utils::date::parse_period;
use crate::utils::formatting::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        all_owners,
        at,
    } = cmd
    {
        let tz = cfg.time_zone()?;
        let now = resolve_now(at.as_deref(), tz)?;
        let pool = DbPool::new(&cfg.database)?;

        let owner = if *all_owners {
            None
        } else {
            Some(cfg.owner_id.as_str())
        };

        let period = period.as_deref().map(parse_period).transpose()?;

        let sessions: Vec<WorkSession> = load_sessions(&pool.conn, owner)?
            .into_iter()
            .map(|row| row.session)
            .collect();
        let sessions = filter_by_period(sessions, period, tz);

        if sessions.is_empty() {
            println!("No sessions found.");
            return Ok(());
        }

        let summaries = Core::build_summaries(&sessions, tz, now);

        header(format!(
            "Sessions for {} ({})",
            owner.unwrap_or("all owners"),
            tz.name()
        ));
        print!("{}", summaries_table(&summaries).render(separator_char(cfg)));
        println!(
            "\nSessions: {} | Total net: {}",
            summaries.len(),
            format_duration(Core::total_net_seconds(&summaries))
        );
    }
    Ok(())
}

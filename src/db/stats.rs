use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts and clock-in range of the session store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub sessions: i64,
    pub open_sessions: i64,
    pub breaks: i64,
    pub owners: i64,
    pub first_clock_in: Option<String>,
    pub last_clock_in: Option<String>,
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    let conn = &pool.conn;
    let count = |sql: &str| -> rusqlite::Result<i64> { conn.query_row(sql, [], |row| row.get(0)) };

    Ok(DbStats {
        sessions: count("SELECT COUNT(*) FROM sessions")?,
        open_sessions: count("SELECT COUNT(*) FROM sessions WHERE clock_out IS NULL")?,
        breaks: count("SELECT COUNT(*) FROM breaks")?,
        owners: count("SELECT COUNT(DISTINCT owner_id) FROM sessions")?,
        first_clock_in: conn
            .query_row("SELECT MIN(clock_in) FROM sessions", [], |row| row.get(0))
            .optional()?
            .flatten(),
        last_clock_in: conn
            .query_row("SELECT MAX(clock_in) FROM sessions", [], |row| row.get(0))
            .optional()?
            .flatten(),
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = collect_stats(pool)?;

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {file_kb:.1} KB");
    println!("{CYAN}• Sessions:{RESET} {GREEN}{}{RESET} ({} open)", stats.sessions, stats.open_sessions);
    println!("{CYAN}• Breaks:{RESET} {GREEN}{}{RESET}", stats.breaks);
    println!("{CYAN}• Owners:{RESET} {GREEN}{}{RESET}", stats.owners);

    match (&stats.first_clock_in, &stats.last_clock_in) {
        (Some(first), Some(last)) => {
            println!("{CYAN}• Range:{RESET} {first} → {last}");
        }
        _ => println!("{CYAN}• Range:{RESET} {GREY}(no sessions){RESET}"),
    }
    println!();

    Ok(())
}

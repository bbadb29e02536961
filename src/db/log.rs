use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one audit line to the `log` table.
///
/// `operation` is a short machine name (`clock_in`, `del`, `backup`, ...),
/// `target` names what was touched, e.g. `session 12`.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached("INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)")?
        .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    tracing::debug!(operation, target, message, "audit log");
    Ok(())
}

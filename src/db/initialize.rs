use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a freshly opened connection: enforce foreign keys (breaks belong
/// to sessions) and apply any pending migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    let applied = run_pending_migrations(conn)?;
    if !applied.is_empty() {
        tracing::debug!(count = applied.len(), "schema upgraded");
    }

    Ok(())
}

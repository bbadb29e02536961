//! Schema migrations.
//!
//! Every migration is recorded in the `log` table as a `migration_applied`
//! row whose target is the migration version, so running the list again is
//! a no-op.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_sessions_and_breaks",
        description: "Created sessions and breaks tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id    TEXT NOT NULL,
            clock_in    TEXT NOT NULL,
            clock_out   TEXT,
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS breaks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id   INTEGER NOT NULL REFERENCES sessions(id) ON DELETE CASCADE,
            break_start  TEXT NOT NULL,
            break_end    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_owner_clock_in ON sessions(owner_id, clock_in);
        CREATE INDEX IF NOT EXISTS idx_breaks_session ON breaks(session_id);
        "#,
    },
    Migration {
        version: "20261005_0002_single_open_session_per_owner",
        description: "Enforced at most one open session per owner",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_one_open_per_owner
            ON sessions(owner_id) WHERE clock_out IS NULL;
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let fail = |e: rusqlite::Error| AppError::Migration(format!("{}: {e}", m.version));

    // schema change + bookkeeping row commit together; dropping `tx` rolls back
    let tx = conn.unchecked_transaction().map_err(fail)?;
    tx.execute_batch(m.sql).map_err(fail)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )
    .map_err(fail)?;
    tx.commit().map_err(fail)?;

    tracing::info!(version = m.version, "migration applied");
    Ok(())
}

/// Versions of all known migrations that are not yet applied.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
/// Returns the versions that were applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

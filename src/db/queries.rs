use crate::db::models::SessionRow;
use crate::errors::{AppError, AppResult};
use crate::models::work_session::{BreakInterval, WorkSession};
use crate::utils::time::{parse_rfc3339, to_storage};
use chrono::{DateTime, Local, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SESSION_COLUMNS: &str = "id, owner_id, clock_in, clock_out, source";

fn parse_column(raw: &str, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    parse_rfc3339(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_optional_column(raw: Option<String>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    raw.map(|s| parse_column(&s, idx)).transpose()
}

/// Map a `sessions` row; breaks are loaded separately.
fn map_session_row(row: &Row) -> rusqlite::Result<SessionRow> {
    let id: i64 = row.get("id")?;
    let clock_in: String = row.get("clock_in")?;
    let clock_out: Option<String> = row.get("clock_out")?;

    Ok(SessionRow {
        id,
        source: row.get("source")?,
        session: WorkSession {
            id: id.to_string(),
            owner_id: row.get("owner_id")?,
            clock_in: Some(parse_column(&clock_in, 2)?),
            clock_out: parse_optional_column(clock_out, 3)?,
            breaks: Vec::new(),
        },
    })
}

fn map_break_row(row: &Row) -> rusqlite::Result<BreakInterval> {
    let start: String = row.get("break_start")?;
    let end: Option<String> = row.get("break_end")?;

    Ok(BreakInterval {
        break_start: parse_column(&start, 0)?,
        break_end: parse_optional_column(end, 1)?,
    })
}

/// Breaks of a session, in start order.
pub fn load_breaks(conn: &Connection, session_id: i64) -> AppResult<Vec<BreakInterval>> {
    let mut stmt = conn.prepare_cached(
        "SELECT break_start, break_end FROM breaks
         WHERE session_id = ?1
         ORDER BY break_start ASC, id ASC",
    )?;

    let rows = stmt.query_map([session_id], map_break_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn with_breaks(conn: &Connection, mut row: SessionRow) -> AppResult<SessionRow> {
    row.session.breaks = load_breaks(conn, row.id)?;
    Ok(row)
}

/// Insert a freshly clocked-in session and return its row id.
pub fn insert_session(
    conn: &Connection,
    owner_id: &str,
    clock_in: &DateTime<Utc>,
    source: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (owner_id, clock_in, clock_out, source, created_at)
         VALUES (?1, ?2, NULL, ?3, ?4)",
        params![owner_id, to_storage(clock_in), source, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// The open (not clocked-out) session of `owner_id`, if any.
pub fn load_active_session(conn: &Connection, owner_id: &str) -> AppResult<Option<SessionRow>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions
         WHERE owner_id = ?1 AND clock_out IS NULL
         ORDER BY clock_in DESC
         LIMIT 1"
    );

    let row = conn
        .query_row(&sql, [owner_id], map_session_row)
        .optional()?;

    row.map(|r| with_breaks(conn, r)).transpose()
}

/// Latest session of `owner_id` (open or closed), if any.
pub fn load_latest_session(conn: &Connection, owner_id: &str) -> AppResult<Option<SessionRow>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions
         WHERE owner_id = ?1
         ORDER BY clock_in DESC, id DESC
         LIMIT 1"
    );

    let row = conn
        .query_row(&sql, [owner_id], map_session_row)
        .optional()?;

    row.map(|r| with_breaks(conn, r)).transpose()
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<SessionRow> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = ?1");

    let row = conn
        .query_row(&sql, [id], map_session_row)
        .optional()?
        .ok_or(AppError::SessionNotFound(id))?;

    with_breaks(conn, row)
}

/// All sessions in clock-in order, optionally restricted to one owner.
pub fn load_sessions(conn: &Connection, owner_id: Option<&str>) -> AppResult<Vec<SessionRow>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions
         WHERE ?1 IS NULL OR owner_id = ?1
         ORDER BY clock_in ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([owner_id], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(with_breaks(conn, r?)?);
    }
    Ok(out)
}

pub fn close_session(conn: &Connection, id: i64, clock_out: &DateTime<Utc>) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE sessions SET clock_out = ?1 WHERE id = ?2 AND clock_out IS NULL",
        params![to_storage(clock_out), id],
    )?;

    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

pub fn insert_break(conn: &Connection, session_id: i64, start: &DateTime<Utc>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO breaks (session_id, break_start, break_end) VALUES (?1, ?2, NULL)",
        params![session_id, to_storage(start)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close every open break of the session; returns how many were closed.
pub fn close_open_breaks(conn: &Connection, session_id: i64, end: &DateTime<Utc>) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE breaks SET break_end = ?1 WHERE session_id = ?2 AND break_end IS NULL",
        params![to_storage(end), session_id],
    )?;
    Ok(changed)
}

/// Remove a session and its breaks.
pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM breaks WHERE session_id = ?1", [id])?;
    let changed = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;

    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

/// Rows of the internal log table, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

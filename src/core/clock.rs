//! Clock-in / break / clock-out actions against the session store.
//!
//! The ledger only reports state; this is where the state machine is
//! enforced before anything is written.

use crate::core::calculator::derive_status;
use crate::db::log::ttlog;
use crate::db::models::SessionRow;
use crate::db::pool::DbPool;
use crate::db::queries::{
    close_open_breaks, close_session, insert_break, insert_session, load_active_session,
    load_latest_session, load_session,
};
use crate::errors::{AppError, AppResult};
use crate::models::session_status::{ClockAction, SessionStatus, transition};
use chrono::{DateTime, Utc};

pub struct ClockLogic;

fn active_or_err(pool: &DbPool, owner_id: &str) -> AppResult<SessionRow> {
    load_active_session(&pool.conn, owner_id)?
        .ok_or_else(|| AppError::NoActiveSession(owner_id.to_string()))
}

/// Reject instants earlier than what is already recorded on the session,
/// so the store never holds an inverted interval or two overlapping
/// sessions for one owner.
fn ensure_not_before_last(row: &SessionRow, at: DateTime<Utc>) -> AppResult<()> {
    if let Some(last) = row.session.last_recorded_instant()
        && at < last
    {
        return Err(AppError::InvalidTransition(format!(
            "{} is earlier than the last recorded time {} of session {}",
            at.to_rfc3339(),
            last.to_rfc3339(),
            row.id
        )));
    }
    Ok(())
}

fn audit(pool: &DbPool, action: ClockAction, row_id: i64, owner_id: &str, at: DateTime<Utc>) {
    // non-blocking: a failed audit line must not undo the action
    if let Err(e) = ttlog(
        &pool.conn,
        action.log_operation(),
        &format!("session {row_id}"),
        &format!("{} for {} at {}", action.label(), owner_id, at.to_rfc3339()),
    ) {
        tracing::warn!(error = %e, "failed to write internal log");
    }
}

impl ClockLogic {
    /// Open a new session. Fails if the owner already has one open, or if
    /// `at` falls before the end of the owner's latest session.
    pub fn clock_in(pool: &mut DbPool, owner_id: &str, at: DateTime<Utc>) -> AppResult<SessionRow> {
        if let Some(open) = load_active_session(&pool.conn, owner_id)? {
            return Err(AppError::AlreadyClockedIn(owner_id.to_string(), open.id));
        }

        let latest = load_latest_session(&pool.conn, owner_id)?;
        if let Some(last) = &latest {
            ensure_not_before_last(last, at)?;
        }

        transition(latest.as_ref().map(|r| derive_status(&r.session, at)), ClockAction::ClockIn)?;

        let id = insert_session(&pool.conn, owner_id, &at, "cli")?;
        tracing::info!(owner_id, session = id, "clocked in");
        audit(pool, ClockAction::ClockIn, id, owner_id, at);

        load_session(&pool.conn, id)
    }

    pub fn start_break(pool: &mut DbPool, owner_id: &str, at: DateTime<Utc>) -> AppResult<SessionRow> {
        Self::apply(pool, owner_id, at, ClockAction::StartBreak)
    }

    pub fn end_break(pool: &mut DbPool, owner_id: &str, at: DateTime<Utc>) -> AppResult<SessionRow> {
        Self::apply(pool, owner_id, at, ClockAction::EndBreak)
    }

    /// Close the open session. Rejected while a break is still open.
    pub fn clock_out(pool: &mut DbPool, owner_id: &str, at: DateTime<Utc>) -> AppResult<SessionRow> {
        Self::apply(pool, owner_id, at, ClockAction::ClockOut)
    }

    /// Current status of the owner's open session, or `None` without one.
    pub fn current_status(
        pool: &DbPool,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<(SessionRow, SessionStatus)>> {
        Ok(load_active_session(&pool.conn, owner_id)?.map(|row| {
            let status = derive_status(&row.session, now);
            (row, status)
        }))
    }

    fn apply(
        pool: &mut DbPool,
        owner_id: &str,
        at: DateTime<Utc>,
        action: ClockAction,
    ) -> AppResult<SessionRow> {
        let row = active_or_err(pool, owner_id)?;
        let status = derive_status(&row.session, at);

        transition(Some(status), action)?;
        ensure_not_before_last(&row, at)?;

        match action {
            ClockAction::StartBreak => {
                insert_break(&pool.conn, row.id, &at)?;
            }
            ClockAction::EndBreak => {
                close_open_breaks(&pool.conn, row.id, &at)?;
            }
            ClockAction::ClockOut => {
                close_session(&pool.conn, row.id, &at)?;
            }
            ClockAction::ClockIn => {
                return Err(AppError::AlreadyClockedIn(owner_id.to_string(), row.id));
            }
        }

        tracing::info!(owner_id, session = row.id, action = action.label(), "clock action");
        audit(pool, action, row.id, owner_id, at);

        load_session(&pool.conn, row.id)
    }
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session, load_session};
use crate::errors::AppResult;
use crate::models::work_session::WorkSession;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one session (and its breaks). Returns the removed snapshot.
    pub fn apply(pool: &mut DbPool, session_id: i64) -> AppResult<WorkSession> {
        let row = load_session(&pool.conn, session_id)?;

        let tx = pool.conn.transaction()?;
        delete_session(&tx, session_id)?;
        ttlog(
            &tx,
            "del",
            &format!("session {session_id}"),
            &format!(
                "Deleted session of {} with {} break(s)",
                row.session.owner_id,
                row.session.breaks.len()
            ),
        )?;
        tx.commit()?;

        tracing::info!(session = session_id, "session deleted");
        Ok(row.session)
    }
}

//! Database row models.
//! These are thin wrappers around SQLite rows.

use crate::models::work_session::WorkSession;

/// A stored session: the numeric row id plus the ledger-facing snapshot.
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub id: i64,
    pub source: String,
    pub session: WorkSession,
}

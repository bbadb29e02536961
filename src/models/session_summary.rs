use super::session_status::SessionStatus;
use serde::Serialize;

/// Display-ready view of one session, computed at a given "now".
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub owner_id: String,
    pub clock_in_local: Option<String>,  // rendered in the configured time zone
    pub clock_out_local: Option<String>, // None while the session is open
    pub elapsed_seconds: i64,
    pub break_seconds: i64,
    pub net_seconds: i64,
    pub net_display: String,
    pub status: SessionStatus,
}

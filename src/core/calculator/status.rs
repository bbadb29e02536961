use crate::models::session_status::SessionStatus;
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Utc};

/// Classify a session snapshot.
///
/// - `ClockedOut` whenever a clock-out is present, whatever the breaks say
/// - `OnBreak` when still open and some break has no end
/// - `Working` otherwise
///
/// `now` does not affect the result; it is accepted so callers can pass the
/// same inputs they give to the duration functions.
pub fn derive_status(session: &WorkSession, _now: DateTime<Utc>) -> SessionStatus {
    if session.is_closed() {
        SessionStatus::ClockedOut
    } else if session.open_break().is_some() {
        SessionStatus::OnBreak
    } else {
        SessionStatus::Working
    }
}

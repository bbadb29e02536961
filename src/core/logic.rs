use crate::core::calculator::{
    break_seconds, compute_net_working_seconds, derive_status, elapsed_seconds, format_duration,
};
use crate::models::session_summary::SessionSummary;
use crate::models::work_session::WorkSession;
use crate::utils::time::to_local_string;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub struct Core;

impl Core {
    /// One display-ready summary for `session`, evaluated at `now` in `tz`.
    pub fn build_session_summary(session: &WorkSession, tz: Tz, now: DateTime<Utc>) -> SessionSummary {
        let net = compute_net_working_seconds(session, tz, now);

        SessionSummary {
            session_id: session.id.clone(),
            owner_id: session.owner_id.clone(),
            clock_in_local: session.clock_in.map(|t| to_local_string(&t, tz)),
            clock_out_local: session.clock_out.map(|t| to_local_string(&t, tz)),
            elapsed_seconds: elapsed_seconds(session, tz, now),
            break_seconds: break_seconds(session, tz, now),
            net_seconds: net,
            net_display: format_duration(net),
            status: derive_status(session, now),
        }
    }

    pub fn build_summaries(sessions: &[WorkSession], tz: Tz, now: DateTime<Utc>) -> Vec<SessionSummary> {
        sessions
            .iter()
            .map(|s| Self::build_session_summary(s, tz, now))
            .collect()
    }

    pub fn total_net_seconds(summaries: &[SessionSummary]) -> i64 {
        summaries.iter().map(|s| s.net_seconds).sum()
    }
}

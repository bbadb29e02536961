// src/export/model.rs

use crate::models::session_summary::SessionSummary;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: String,
    pub owner_id: String,
    pub clock_in: String,
    pub clock_out: String,
    pub elapsed_seconds: i64,
    pub break_seconds: i64,
    pub net_seconds: i64,
    pub net: String,
    pub status: String,
}

impl From<&SessionSummary> for SessionExport {
    fn from(s: &SessionSummary) -> Self {
        Self {
            id: s.session_id.clone(),
            owner_id: s.owner_id.clone(),
            clock_in: s.clock_in_local.clone().unwrap_or_default(),
            clock_out: s.clock_out_local.clone().unwrap_or_default(),
            elapsed_seconds: s.elapsed_seconds,
            break_seconds: s.break_seconds,
            net_seconds: s.net_seconds,
            net: s.net_display.clone(),
            status: s.status.code().to_string(),
        }
    }
}

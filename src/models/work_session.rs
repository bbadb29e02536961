use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single break taken during a work session.
///
/// `break_end == None` means the break is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakInterval {
    pub break_start: DateTime<Utc>,
    #[serde(default)]
    pub break_end: Option<DateTime<Utc>>,
}

impl BreakInterval {
    pub fn new(break_start: DateTime<Utc>, break_end: Option<DateTime<Utc>>) -> Self {
        Self {
            break_start,
            break_end,
        }
    }

    pub fn is_open(&self) -> bool {
        self.break_end.is_none()
    }
}

/// Snapshot of one attendance session (clock-in, breaks, clock-out).
///
/// All instants are absolute (UTC-anchored). Nothing here is validated:
/// the ledger calculator clamps inverted intervals instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

impl WorkSession {
    pub fn is_closed(&self) -> bool {
        self.clock_out.is_some()
    }

    /// First break that has a start but no end, if any.
    pub fn open_break(&self) -> Option<&BreakInterval> {
        self.breaks.iter().find(|b| b.is_open())
    }

    /// Latest instant recorded on the session (clock-in, break bounds, clock-out).
    pub fn last_recorded_instant(&self) -> Option<DateTime<Utc>> {
        let break_instants = self
            .breaks
            .iter()
            .flat_map(|b| std::iter::once(b.break_start).chain(b.break_end));

        self.clock_in
            .into_iter()
            .chain(self.clock_out)
            .chain(break_instants)
            .max()
    }
}

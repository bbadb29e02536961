//! Report over a Logs API dump.
//!
//! The Logs collaborator answers list requests with
//! `{ "data": { "result": [ ...records ], "meta": { ... } } }`.
//! This is the boundary where malformed records are filtered out: anything
//! with an unparseable instant is dropped with a warning before it reaches
//! the ledger. Records without a clock-in are kept; they count as zero.

use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::session_summary::SessionSummary;
use crate::models::work_session::{BreakInterval, WorkSession};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::formatting::format_duration;
use crate::utils::table::Table;
use crate::utils::time::parse_rfc3339;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct LogsEnvelope {
    pub data: LogsPage,
}

#[derive(Debug, Deserialize)]
pub struct LogsPage {
    #[serde(default)]
    pub result: Vec<LogRecord>,
    #[serde(default)]
    pub meta: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    #[serde(default)]
    pub break_start: Option<String>,
    #[serde(default)]
    pub break_end: Option<String>,
}

/// One raw record as the Logs API sends it; instants are still strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<Value>,
    #[serde(default)]
    pub owner_id: Option<Value>,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub breaks: Vec<BreakRecord>,
}

/// Result of reading a Logs dump: usable sessions plus one reason per
/// rejected record.
#[derive(Debug, Default)]
pub struct ParsedLogs {
    pub sessions: Vec<WorkSession>,
    pub rejected: Vec<String>,
    pub meta: Option<Value>,
}

fn value_to_string(v: &Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn parse_optional(raw: &Option<String>) -> Result<Option<DateTime<Utc>>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_rfc3339(s).map(Some).map_err(|e| e.to_string()),
    }
}

impl LogRecord {
    /// Convert into a ledger session, or explain why the record is unusable.
    pub fn into_session(self, index: usize) -> Result<WorkSession, String> {
        let id = match value_to_string(&self.id) {
            s if s.is_empty() => format!("#{index}"),
            s => s,
        };

        let mut breaks = Vec::with_capacity(self.breaks.len());
        for (i, b) in self.breaks.iter().enumerate() {
            let start = parse_optional(&b.break_start)
                .map_err(|e| format!("record {id}, break {i}: {e}"))?
                .ok_or_else(|| format!("record {id}, break {i}: missing breakStart"))?;
            let end = parse_optional(&b.break_end).map_err(|e| format!("record {id}, break {i}: {e}"))?;
            breaks.push(BreakInterval::new(start, end));
        }

        Ok(WorkSession {
            owner_id: value_to_string(&self.owner_id),
            clock_in: parse_optional(&self.clock_in).map_err(|e| format!("record {id}: {e}"))?,
            clock_out: parse_optional(&self.clock_out).map_err(|e| format!("record {id}: {e}"))?,
            breaks,
            id,
        })
    }
}

/// Parse a Logs API response body.
pub fn parse_logs(json: &str) -> AppResult<ParsedLogs> {
    let envelope: LogsEnvelope = serde_json::from_str(json)?;
    let mut parsed = ParsedLogs {
        meta: envelope.data.meta,
        ..Default::default()
    };

    for (index, record) in envelope.data.result.into_iter().enumerate() {
        match record.into_session(index) {
            Ok(session) => parsed.sessions.push(session),
            Err(reason) => {
                tracing::warn!(%reason, "skipping malformed log record");
                parsed.rejected.push(reason);
            }
        }
    }

    Ok(parsed)
}

pub fn load_logs_file(path: &Path) -> AppResult<ParsedLogs> {
    let content = fs::read_to_string(path)?;
    parse_logs(&content)
}

/// Render summaries as a table (shared by `report` and `list`).
pub fn summaries_table(summaries: &[SessionSummary]) -> Table {
    let mut table = Table::new(["ID", "OWNER", "CLOCK IN", "CLOCK OUT", "BREAKS", "NET", "STATUS"]);

    for s in summaries {
        table.add_row(vec![
            s.session_id.clone(),
            colorize_optional(&s.owner_id),
            colorize_optional(s.clock_in_local.as_deref().unwrap_or("--")),
            colorize_optional(s.clock_out_local.as_deref().unwrap_or("--")),
            format_duration(s.break_seconds),
            s.net_display.clone(),
            colorize_status(s.status),
        ]);
    }

    table
}

pub struct ReportLogic;

impl ReportLogic {
    /// Print one line per usable record and the total net time.
    pub fn report(path: &Path, tz: Tz, now: DateTime<Utc>, sep: char) -> AppResult<Vec<SessionSummary>> {
        let parsed = load_logs_file(path)?;

        for reason in &parsed.rejected {
            warning(format!("Skipped record: {reason}"));
        }

        let summaries = Core::build_summaries(&parsed.sessions, tz, now);

        header(format!("Logs report ({})", tz.name()));
        if summaries.is_empty() {
            println!("No sessions in {}.", path.display());
            return Ok(summaries);
        }

        print!("{}", summaries_table(&summaries).render(sep));
        println!(
            "\nSessions: {} | Total net: {}",
            summaries.len(),
            format_duration(Core::total_net_seconds(&summaries))
        );

        Ok(summaries)
    }
}

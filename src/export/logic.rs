// src/export/logic.rs

use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::models::work_session::WorkSession;
use crate::ui::messages::warning;
use crate::utils::date::{Period, parse_period};
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Keep sessions whose clock-in falls, as a civil date in `tz`, inside `period`.
/// Sessions without a clock-in only survive when there is no filter.
pub fn filter_by_period(sessions: Vec<WorkSession>, period: Option<Period>, tz: Tz) -> Vec<WorkSession> {
    let Some(period) = period else {
        return sessions;
    };

    sessions
        .into_iter()
        .filter(|s| {
            s.clock_in
                .map(|t| period.contains(t.with_timezone(&tz).date_naive()))
                .unwrap_or(false)
        })
        .collect()
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export session summaries.
    ///
    /// - `range`: `None`, `"all"`, or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`
    /// - `owner`: restrict to one owner, or export everyone with `None`
    ///
    /// Returns the number of exported rows.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        owner: Option<&str>,
        tz: Tz,
        now: DateTime<Utc>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let period = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let sessions: Vec<WorkSession> = load_sessions(&pool.conn, owner)?
            .into_iter()
            .map(|row| row.session)
            .collect();
        let sessions = filter_by_period(sessions, period, tz);

        if sessions.is_empty() {
            warning("No sessions found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<SessionExport> = Core::build_summaries(&sessions, tz, now)
            .iter()
            .map(SessionExport::from)
            .collect();

        tracing::info!(format = format.as_str(), rows = rows.len(), "exporting sessions");

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

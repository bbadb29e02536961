//! Time utilities: parsing instants from the CLI / Logs API, rendering them
//! in the configured civil time zone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse an IANA zone name such as "Europe/London".
pub fn parse_time_zone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimeZone(name.to_string()))
}

/// Parse an absolute ISO-8601 / RFC 3339 instant ("2025-01-15T09:00:00Z").
pub fn parse_rfc3339(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse an instant typed by a user.
///
/// RFC 3339 strings are taken as-is. A naive "YYYY-MM-DD HH:MM[:SS]" is
/// read as civil time in `tz`; on a DST fold the earlier instant wins, and
/// a time that falls in a DST gap is rejected.
pub fn parse_instant(s: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = parse_rfc3339(s) {
        return Ok(dt);
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::InvalidTimestamp(format!("{s} does not exist in {}", tz.name()))
        })
}

/// Storage form: RFC 3339, UTC, whole seconds.
pub fn to_storage(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render an instant as civil time in `tz`.
pub fn to_local_string(dt: &DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

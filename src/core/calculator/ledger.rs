//! Net working time for a single session.
//!
//! Every instant is normalized into the configured civil time zone before
//! any arithmetic, but the subtraction itself runs on absolute instants, so
//! a daylight-saving jump never adds or removes an hour.
//!
//! Open intervals (no clock-out, or a break with no end) run up to `now`.
//! The caller supplies `now`; nothing in here reads the system clock.

use crate::models::work_session::WorkSession;
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

fn clamp_non_negative(delta: TimeDelta) -> TimeDelta {
    delta.max(TimeDelta::zero())
}

/// Sum of all break durations, each clamped at zero on its own.
///
/// Overlapping breaks are NOT merged: each one counts in full. The sum
/// saturates at `TimeDelta::MAX` instead of overflowing.
fn total_break(session: &WorkSession, tz: Tz, now: DateTime<Tz>) -> TimeDelta {
    session
        .breaks
        .iter()
        .map(|b| {
            let start = b.break_start.with_timezone(&tz);
            let end = b.break_end.map(|e| e.with_timezone(&tz)).unwrap_or(now);
            clamp_non_negative(end - start)
        })
        .fold(TimeDelta::zero(), |acc, d| acc.checked_add(&d).unwrap_or(TimeDelta::MAX))
}

/// Wall-clock span between clock-in and clock-out (or `now`), without breaks.
fn total_span(session: &WorkSession, tz: Tz, now: DateTime<Tz>) -> Option<TimeDelta> {
    let start = session.clock_in?.with_timezone(&tz);
    let end = session
        .clock_out
        .map(|t| t.with_timezone(&tz))
        .unwrap_or(now);

    Some(end - start)
}

/// Elapsed seconds from clock-in to clock-out (or `now`), clamped at zero.
/// Zero when the session has no clock-in.
pub fn elapsed_seconds(session: &WorkSession, tz: Tz, now: DateTime<Utc>) -> i64 {
    let now = now.with_timezone(&tz);
    total_span(session, tz, now)
        .map(clamp_non_negative)
        .unwrap_or_else(TimeDelta::zero)
        .num_seconds()
}

/// Seconds spent on breaks; an open break accrues up to `now`.
pub fn break_seconds(session: &WorkSession, tz: Tz, now: DateTime<Utc>) -> i64 {
    total_break(session, tz, now.with_timezone(&tz)).num_seconds()
}

/// Net working seconds: elapsed time minus break time, never below zero.
///
/// A session without a clock-in yields 0. Sub-second remainders are
/// dropped, so the value never overstates the time actually worked.
pub fn compute_net_working_seconds(session: &WorkSession, tz: Tz, now: DateTime<Utc>) -> i64 {
    let now = now.with_timezone(&tz);

    let Some(worked) = total_span(session, tz, now) else {
        return 0;
    };

    // only a negative span minus a saturated break total can overflow
    let net = worked
        .checked_sub(&total_break(session, tz, now))
        .map(clamp_non_negative)
        .unwrap_or_else(TimeDelta::zero);

    // net >= 0 here, so truncation is a floor
    net.num_seconds()
}

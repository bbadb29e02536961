use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;
use timeledger::core::calculator::{
    break_seconds, compute_net_working_seconds, elapsed_seconds, format_duration,
};

mod common;
use common::{brk, secs, session, t0, ts};

const LONDON: Tz = chrono_tz::Europe::London;

#[test]
fn test_closed_session_without_breaks() {
    let s = session(Some(t0()), Some(t0() + secs(8 * 3600)), vec![]);

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0() + secs(99_999)), 8 * 3600);
    assert_eq!(elapsed_seconds(&s, LONDON, t0()), 8 * 3600);
    assert_eq!(break_seconds(&s, LONDON, t0()), 0);
}

#[test]
fn test_break_subtraction_is_exact() {
    let s = session(
        Some(t0()),
        Some(t0() + secs(3600)),
        vec![brk(t0() + secs(600), Some(t0() + secs(900)))],
    );

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0() + secs(7200)), 3300);
    assert_eq!(break_seconds(&s, LONDON, t0() + secs(7200)), 300);
}

#[test]
fn test_overlapping_breaks_are_summed_not_merged() {
    let s = session(
        Some(t0()),
        Some(t0() + secs(1000)),
        vec![
            brk(t0(), Some(t0() + secs(100))),
            brk(t0() + secs(50), Some(t0() + secs(150))),
        ],
    );

    // 100 + 100, not the 150s union
    assert_eq!(break_seconds(&s, LONDON, t0()), 200);
    assert_eq!(compute_net_working_seconds(&s, LONDON, t0()), 800);
}

#[test]
fn test_missing_clock_in_yields_zero() {
    let s = session(
        None,
        Some(t0() + secs(3600)),
        vec![brk(t0(), Some(t0() + secs(60)))],
    );

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0() + secs(7200)), 0);
    assert_eq!(elapsed_seconds(&s, LONDON, t0() + secs(7200)), 0);
}

#[test]
fn test_open_session_runs_until_now() {
    let s = session(Some(t0()), None, vec![]);

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0() + secs(125)), 125);
}

#[test]
fn test_open_break_accrues_against_worker() {
    let s = session(Some(t0()), None, vec![brk(t0() + secs(600), None)]);
    let now = t0() + secs(1000);

    assert_eq!(break_seconds(&s, LONDON, now), 400);
    assert_eq!(compute_net_working_seconds(&s, LONDON, now), 600);

    // while the break stays open, net time does not move
    assert_eq!(compute_net_working_seconds(&s, LONDON, now + secs(500)), 600);
}

#[test]
fn test_open_session_is_monotonic_in_now() {
    let s = session(
        Some(t0()),
        None,
        vec![brk(t0() + secs(300), Some(t0() + secs(420)))],
    );

    let mut previous = 0;
    for step in 0..200 {
        let now = t0() + secs(step * 37);
        let net = compute_net_working_seconds(&s, LONDON, now);
        assert!(net >= previous, "net went down at step {step}: {net} < {previous}");
        previous = net;
    }
}

#[test]
fn test_inverted_intervals_are_clamped() {
    // clock-out before clock-in
    let inverted = session(Some(t0()), Some(t0() - secs(600)), vec![]);
    assert_eq!(compute_net_working_seconds(&inverted, LONDON, t0()), 0);
    assert_eq!(elapsed_seconds(&inverted, LONDON, t0()), 0);

    // break end before break start contributes nothing
    let bad_break = session(
        Some(t0()),
        Some(t0() + secs(3600)),
        vec![brk(t0() + secs(900), Some(t0() + secs(600)))],
    );
    assert_eq!(break_seconds(&bad_break, LONDON, t0()), 0);
    assert_eq!(compute_net_working_seconds(&bad_break, LONDON, t0()), 3600);
}

#[test]
fn test_breaks_longer_than_session_floor_at_zero() {
    let s = session(
        Some(t0()),
        Some(t0() + secs(600)),
        vec![brk(t0() - secs(3600), Some(t0() + secs(600)))],
    );

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0()), 0);
}

#[test]
fn test_sub_second_remainder_is_floored() {
    let s = session(
        Some(t0()),
        Some(t0() + TimeDelta::milliseconds(59_999)),
        vec![],
    );

    assert_eq!(compute_net_working_seconds(&s, LONDON, t0()), 59);
}

#[test]
fn test_dst_spring_forward_matches_utc_arithmetic() {
    // Europe/London jumps 01:00 GMT -> 02:00 BST on 2025-03-30
    let clock_in = ts("2025-03-30T00:30:00Z");
    let clock_out = ts("2025-03-30T02:30:00Z");
    let s = session(Some(clock_in), Some(clock_out), vec![]);

    let utc_only = (clock_out - clock_in).num_seconds();
    assert_eq!(utc_only, 7200);
    assert_eq!(compute_net_working_seconds(&s, LONDON, clock_out), utc_only);
}

#[test]
fn test_dst_fall_back_with_break_matches_utc_arithmetic() {
    // Europe/London repeats 01:00-02:00 on 2025-10-26
    let clock_in = ts("2025-10-25T23:00:00Z");
    let clock_out = ts("2025-10-26T03:00:00Z");
    let s = session(
        Some(clock_in),
        Some(clock_out),
        vec![brk(ts("2025-10-26T00:45:00Z"), Some(ts("2025-10-26T01:15:00Z")))],
    );

    assert_eq!(compute_net_working_seconds(&s, LONDON, clock_out), 4 * 3600 - 1800);

    // zone choice never changes a duration
    let utc = compute_net_working_seconds(&s, Tz::UTC, clock_out);
    let tokyo = compute_net_working_seconds(&s, chrono_tz::Asia::Tokyo, clock_out);
    assert_eq!(utc, 4 * 3600 - 1800);
    assert_eq!(tokyo, utc);
}

#[test]
fn test_net_is_never_negative() {
    let cases = vec![
        session(None, None, vec![]),
        session(Some(t0()), None, vec![brk(t0() - secs(10_000), None)]),
        session(Some(t0() + secs(5000)), None, vec![]),
        session(Some(t0()), Some(t0()), vec![brk(t0(), Some(t0() + secs(1)))]),
    ];

    for (i, s) in cases.iter().enumerate() {
        for now in [t0() - secs(3600), t0(), t0() + secs(3600)] {
            assert!(compute_net_working_seconds(s, LONDON, now) >= 0, "case {i}");
        }
    }
}

#[test]
fn test_huge_break_total_saturates_instead_of_panicking() {
    let year_start = |y: i32| {
        NaiveDate::from_ymd_opt(y, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("year within chrono range")
            .and_utc()
    };
    let far_past = year_start(-200_000);
    let far_future = year_start(200_000);

    // each break fits in a TimeDelta, their sum does not
    let breaks = (0..1000).map(|_| brk(far_past, Some(far_future))).collect();
    let s = session(Some(t0()), Some(t0() + secs(3600)), breaks);

    assert_eq!(break_seconds(&s, LONDON, t0()), TimeDelta::MAX.num_seconds());
    assert_eq!(compute_net_working_seconds(&s, LONDON, t0()), 0);

    // a negative span minus the saturated total still floors at zero
    let inverted = session(Some(t0()), Some(t0() - secs(3600)), s.breaks.clone());
    assert_eq!(compute_net_working_seconds(&inverted, LONDON, t0()), 0);
}

#[test]
fn test_format_duration_boundaries() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(45), "45s");
    assert_eq!(format_duration(59), "59s");
    assert_eq!(format_duration(60), "1m");
    assert_eq!(format_duration(3599), "59m 59s");
    assert_eq!(format_duration(3600), "1h");
    assert_eq!(format_duration(3661), "1h 1m 1s");
}

#[test]
fn test_format_duration_skips_zero_components() {
    assert_eq!(format_duration(3601), "1h 1s");
    assert_eq!(format_duration(7260), "2h 1m");
    assert_eq!(format_duration(27 * 3600), "27h");
}

#[test]
fn test_format_duration_clamps_negative_input() {
    assert_eq!(format_duration(-1), "0s");
    assert_eq!(format_duration(i64::MIN), "0s");
}

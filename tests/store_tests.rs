use timeledger::core::clock::ClockLogic;
use timeledger::core::del::DeleteLogic;
use timeledger::core::live::render_status;
use timeledger::db::migrate::{pending_migrations, run_pending_migrations};
use timeledger::db::pool::DbPool;
use timeledger::db::queries::{load_latest_session, load_log, load_sessions};
use timeledger::errors::AppError;
use timeledger::models::session_status::SessionStatus;

mod common;
use common::{secs, t0};

const LONDON: chrono_tz::Tz = chrono_tz::Europe::London;

#[test]
fn test_migrations_are_applied_once() {
    let pool = DbPool::in_memory().expect("in-memory db");

    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert!(run_pending_migrations(&pool.conn).unwrap().is_empty());

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn test_log_dates_share_one_format() {
    let mut pool = DbPool::in_memory().expect("in-memory db");
    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();

    let rows = load_log(&pool.conn).unwrap();
    assert!(rows.len() >= 3);
    for (id, date, op, _, _) in rows {
        assert!(
            chrono::DateTime::parse_from_rfc3339(&date).is_ok(),
            "log row {id} ({op}) has non RFC 3339 date {date}"
        );
    }
}

#[test]
fn test_full_day_round_trips_through_store() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let row = ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    assert_eq!(row.source, "cli");
    assert_eq!(row.session.clock_in, Some(t0()));

    ClockLogic::start_break(&mut pool, "alice", t0() + secs(3600)).unwrap();
    ClockLogic::end_break(&mut pool, "alice", t0() + secs(5400)).unwrap();
    let row = ClockLogic::clock_out(&mut pool, "alice", t0() + secs(8 * 3600)).unwrap();

    assert_eq!(row.session.clock_out, Some(t0() + secs(8 * 3600)));
    assert_eq!(row.session.breaks.len(), 1);
    assert_eq!(row.session.breaks[0].break_start, t0() + secs(3600));
    assert_eq!(row.session.breaks[0].break_end, Some(t0() + secs(5400)));

    let summary =
        timeledger::core::logic::Core::build_session_summary(&row.session, LONDON, t0() + secs(99_999));
    assert_eq!(summary.net_seconds, 8 * 3600 - 1800);
    assert_eq!(summary.net_display, "7h 30m");
    assert_eq!(summary.status, SessionStatus::ClockedOut);
}

#[test]
fn test_clock_actions_write_audit_lines() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::start_break(&mut pool, "alice", t0() + secs(60)).unwrap();
    ClockLogic::end_break(&mut pool, "alice", t0() + secs(120)).unwrap();
    ClockLogic::clock_out(&mut pool, "alice", t0() + secs(180)).unwrap();

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();

    assert_eq!(ops, vec!["clock_in", "break_start", "break_end", "clock_out"]);
}

#[test]
fn test_second_clock_in_is_rejected() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let first = ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    let err = ClockLogic::clock_in(&mut pool, "alice", t0() + secs(60)).unwrap_err();

    match err {
        AppError::AlreadyClockedIn(owner, id) => {
            assert_eq!(owner, "alice");
            assert_eq!(id, first.id);
        }
        other => panic!("unexpected error: {other}"),
    }

    // another owner is unaffected
    assert!(ClockLogic::clock_in(&mut pool, "bob", t0() + secs(60)).is_ok());
}

#[test]
fn test_clock_out_while_on_break_keeps_session_open() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::start_break(&mut pool, "alice", t0() + secs(600)).unwrap();

    let err = ClockLogic::clock_out(&mut pool, "alice", t0() + secs(900)).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    let (row, status) = ClockLogic::current_status(&pool, "alice", t0() + secs(900))
        .unwrap()
        .expect("session still open");
    assert_eq!(status, SessionStatus::OnBreak);
    assert!(row.session.clock_out.is_none());
}

#[test]
fn test_actions_without_session_fail() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    assert!(matches!(
        ClockLogic::start_break(&mut pool, "alice", t0()),
        Err(AppError::NoActiveSession(_))
    ));
    assert!(matches!(
        ClockLogic::clock_out(&mut pool, "alice", t0()),
        Err(AppError::NoActiveSession(_))
    ));
    assert!(ClockLogic::current_status(&pool, "alice", t0()).unwrap().is_none());
}

#[test]
fn test_action_before_last_recorded_instant_is_rejected() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::start_break(&mut pool, "alice", t0() + secs(600)).unwrap();

    let err = ClockLogic::end_break(&mut pool, "alice", t0() + secs(300)).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[test]
fn test_clock_in_inside_previous_session_is_rejected() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::clock_out(&mut pool, "alice", t0() + secs(8 * 3600)).unwrap();

    // back-dated into the closed session: would double-count 09:00-17:00
    let err = ClockLogic::clock_in(&mut pool, "alice", t0() + secs(3600)).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(load_sessions(&pool.conn, Some("alice")).unwrap().len(), 1);

    // starting exactly at the previous clock-out is fine
    assert!(ClockLogic::clock_in(&mut pool, "alice", t0() + secs(8 * 3600)).is_ok());

    // other owners keep their own timeline
    assert!(ClockLogic::clock_in(&mut pool, "bob", t0() + secs(3600)).is_ok());
}

#[test]
fn test_clock_in_after_clock_out_opens_new_session() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::clock_out(&mut pool, "alice", t0() + secs(3600)).unwrap();
    let second = ClockLogic::clock_in(&mut pool, "alice", t0() + secs(7200)).unwrap();

    let sessions = load_sessions(&pool.conn, Some("alice")).unwrap();
    assert_eq!(sessions.len(), 2);

    let latest = load_latest_session(&pool.conn, "alice").unwrap().unwrap();
    assert_eq!(latest.id, second.id);
}

#[test]
fn test_load_sessions_filters_by_owner() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::clock_in(&mut pool, "bob", t0() + secs(10)).unwrap();

    assert_eq!(load_sessions(&pool.conn, Some("alice")).unwrap().len(), 1);
    assert_eq!(load_sessions(&pool.conn, None).unwrap().len(), 2);
}

#[test]
fn test_delete_removes_session_and_breaks() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let row = ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::start_break(&mut pool, "alice", t0() + secs(60)).unwrap();

    let removed = DeleteLogic::apply(&mut pool, row.id).unwrap();
    assert_eq!(removed.owner_id, "alice");
    assert_eq!(removed.breaks.len(), 1);

    assert!(load_sessions(&pool.conn, None).unwrap().is_empty());
    let remaining: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM breaks", [], |r| r.get(0))
        .unwrap();
    assert_eq!(remaining, 0);

    assert!(matches!(
        DeleteLogic::apply(&mut pool, row.id),
        Err(AppError::SessionNotFound(_))
    ));
}

#[test]
fn test_render_status_lines() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let line = render_status(&pool, "alice", LONDON, t0()).unwrap();
    assert_eq!(line, "No active session for alice | Next: clock in");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::start_break(&mut pool, "alice", t0() + secs(3600)).unwrap();

    let line = render_status(&pool, "alice", LONDON, t0() + secs(3600 + 300)).unwrap();
    assert!(line.contains("on break"), "{line}");
    assert!(line.contains("Net 01:00:00 (1h)"), "{line}");
    assert!(line.contains("Breaks 5m"), "{line}");
    assert!(line.contains("Since 2025-01-13 09:00:00"), "{line}");
    assert!(line.ends_with("Next: end break"), "{line}");
}

#[test]
fn test_render_status_after_clock_out_shows_last_session() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    ClockLogic::clock_in(&mut pool, "alice", t0()).unwrap();
    ClockLogic::clock_out(&mut pool, "alice", t0() + secs(5400)).unwrap();

    let line = render_status(&pool, "alice", LONDON, t0() + secs(7200)).unwrap();
    assert_eq!(
        line,
        "No active session for alice | Last: 1h 30m until 2025-01-13 10:30:00 | Next: clock in"
    );
}

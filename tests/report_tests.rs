use timeledger::core::logic::Core;
use timeledger::core::report::parse_logs;
use timeledger::models::session_status::SessionStatus;

mod common;
use common::ts;

const LONDON: chrono_tz::Tz = chrono_tz::Europe::London;

const LOGS_PAGE: &str = r#"{
  "data": {
    "result": [
      {
        "_id": "a1",
        "ownerId": "alice",
        "clockIn": "2025-01-15T09:00:00Z",
        "clockOut": "2025-01-15T17:00:00Z",
        "breaks": [
          { "breakStart": "2025-01-15T12:00:00Z", "breakEnd": "2025-01-15T12:30:00Z" }
        ]
      },
      {
        "_id": "b2",
        "ownerId": "bob",
        "clockIn": "2025-01-15T10:00:00+01:00",
        "breaks": [
          { "breakStart": "2025-01-15T10:00:00Z" }
        ]
      },
      {
        "ownerId": "carol",
        "clockOut": "2025-01-15T17:00:00Z"
      },
      {
        "_id": "bad",
        "ownerId": "dave",
        "clockIn": "yesterday morning"
      }
    ],
    "meta": { "total": 4, "page": 1 }
  }
}"#;

#[test]
fn test_parse_logs_keeps_usable_records() {
    let parsed = parse_logs(LOGS_PAGE).expect("valid envelope");

    assert_eq!(parsed.sessions.len(), 3);
    assert_eq!(parsed.rejected.len(), 1);
    assert!(parsed.rejected[0].contains("bad"));
    assert!(parsed.meta.is_some());

    let ids: Vec<&str> = parsed.sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "b2", "#2"]);
}

#[test]
fn test_parse_logs_normalizes_offsets_to_utc() {
    let parsed = parse_logs(LOGS_PAGE).unwrap();
    let bob = &parsed.sessions[1];

    assert_eq!(bob.clock_in, Some(ts("2025-01-15T09:00:00Z")));
    assert!(bob.breaks[0].is_open());
}

#[test]
fn test_report_summaries_from_logs() {
    let parsed = parse_logs(LOGS_PAGE).unwrap();
    let now = ts("2025-01-15T10:15:00Z");
    let summaries = Core::build_summaries(&parsed.sessions, LONDON, now);

    // alice: 8h minus 30m
    assert_eq!(summaries[0].net_display, "7h 30m");
    assert_eq!(summaries[0].status, SessionStatus::ClockedOut);

    // bob: clocked in 09:00Z, break open since 10:00Z
    assert_eq!(summaries[1].net_seconds, 3600);
    assert_eq!(summaries[1].status, SessionStatus::OnBreak);

    // carol: no clock-in counts as zero
    assert_eq!(summaries[2].net_seconds, 0);
    assert_eq!(summaries[2].net_display, "0s");
    assert!(summaries[2].clock_in_local.is_none());

    assert_eq!(Core::total_net_seconds(&summaries), 8 * 3600 - 1800 + 3600);
}

#[test]
fn test_break_without_start_rejects_record() {
    let json = r#"{"data": {"result": [
        {"_id": 7, "ownerId": "alice", "clockIn": "2025-01-15T09:00:00Z",
         "breaks": [{"breakEnd": "2025-01-15T10:00:00Z"}]}
    ]}}"#;

    let parsed = parse_logs(json).unwrap();
    assert!(parsed.sessions.is_empty());
    assert_eq!(parsed.rejected.len(), 1);
    assert!(parsed.rejected[0].contains("missing breakStart"));
}

#[test]
fn test_malformed_envelope_is_an_error() {
    assert!(parse_logs("{\"result\": []}").is_err());
    assert!(parse_logs("not json").is_err());
}

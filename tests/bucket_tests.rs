use chrono::NaiveDateTime;
use chrono_tz::Tz;
use seizelog::core::bucket::{bucket_between, bucket_by_local_day};
use seizelog::models::seizure::Seizure;
use seizelog::utils::time::{local_to_utc, parse_timezone};
use std::collections::HashMap;

fn pacific() -> Tz {
    parse_timezone("America/Los_Angeles").expect("valid zone")
}

fn at(s: &str) -> i64 {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid datetime");
    local_to_utc(naive, pacific()).expect("resolvable local time")
}

fn ev(ts: i64) -> Seizure {
    Seizure::new("kat", ts, 60, "test")
}

#[test]
fn zero_events_still_yield_dense_window() {
    // window bounds are raw instants, deliberately mid-day
    let start = at("2025-09-01 15:45:00");
    let now = at("2025-09-10 08:00:00");

    let counts = bucket_between(&[], start, now, pacific()).unwrap();

    assert_eq!(counts.len(), 10);
    assert!(counts.iter().all(|c| c.count == 0));
    assert_eq!(counts.first().unwrap().date, "2025-09-01");
    assert_eq!(counts.last().unwrap().date, "2025-09-10");
}

#[test]
fn events_straddling_local_midnight_land_on_their_days() {
    let start = at("2025-09-01 00:00:00");
    let now = at("2025-09-03 12:00:00");

    let events = vec![
        ev(at("2025-09-01 23:59:59")),
        ev(at("2025-09-02 00:00:00")),
        ev(at("2025-09-02 07:15:00")),
        ev(at("2025-09-02 22:40:00")),
    ];

    let counts = bucket_between(&events, start, now, pacific()).unwrap();
    let by_date: HashMap<&str, u32> = counts.iter().map(|c| (c.date.as_str(), c.count)).collect();

    assert_eq!(by_date["2025-09-01"], 1);
    assert_eq!(by_date["2025-09-02"], 3);
    assert_eq!(by_date["2025-09-03"], 0);
}

#[test]
fn out_of_window_events_are_silently_ignored() {
    let start = at("2025-09-10 00:00:00");
    let now = at("2025-09-12 12:00:00");

    let events = vec![
        ev(at("2025-08-01 10:00:00")), // before the window
        ev(at("2025-09-11 10:00:00")),
    ];

    let counts = bucket_between(&events, start, now, pacific()).unwrap();
    let total: u32 = counts.iter().map(|c| c.count).sum();

    assert_eq!(counts.len(), 3);
    assert_eq!(total, 1);
}

#[test]
fn output_is_sorted_ascending_by_date() {
    let start = at("2025-08-25 12:00:00");
    let now = at("2025-09-05 12:00:00");

    let counts = bucket_between(&[], start, now, pacific()).unwrap();
    let dates: Vec<&str> = counts.iter().map(|c| c.date.as_str()).collect();

    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    // month boundary is crossed without gaps
    assert!(dates.contains(&"2025-08-31"));
    assert!(dates.contains(&"2025-09-01"));
}

#[test]
fn dst_transition_days_appear_exactly_once() {
    // the 23-hour day
    let counts = bucket_between(
        &[],
        at("2024-03-09 12:00:00"),
        at("2024-03-11 12:00:00"),
        pacific(),
    )
    .unwrap();
    let dates: Vec<&str> = counts.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-09", "2024-03-10", "2024-03-11"]);

    // the 25-hour day
    let counts = bucket_between(
        &[],
        at("2024-11-02 12:00:00"),
        at("2024-11-04 12:00:00"),
        pacific(),
    )
    .unwrap();
    let dates: Vec<&str> = counts.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, ["2024-11-02", "2024-11-03", "2024-11-04"]);
}

#[test]
fn default_window_is_six_weeks_of_zero_days() {
    let counts = bucket_by_local_day(&[], None, pacific()).unwrap();

    // 42 days back from now covers 43 calendar dates, give or take the
    // transition-day wobble around DST
    assert!(counts.len() >= 42 && counts.len() <= 44);
    assert!(counts.iter().all(|c| c.count == 0));
}

use chrono_tz::Tz;
use seizelog::core::ingest::{BATCH_SIZE, DEFAULT_IMPORT_NOTE, parse_csv, store_batches};
use seizelog::db::pool::DbPool;
use seizelog::models::seizure::Seizure;
use seizelog::utils::time::{format_local, parse_timezone};
use std::env;
use std::fs;
use std::path::PathBuf;

fn pacific() -> Tz {
    parse_timezone("America/Los_Angeles").expect("valid zone")
}

fn temp_pool(name: &str) -> DbPool {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_seizelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    DbPool::open_ready(&db_path).expect("open test db")
}

#[test]
fn header_row_is_discarded() {
    let raw = "timestamp,duration,notes\n2025-09-04 14:30,60,first event\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records.len(), 1);
    assert!(out.failures.is_empty());
    assert_eq!(out.records[0].notes, "first event");
    assert_eq!(out.records[0].duration, 60);
}

#[test]
fn same_minute_rows_get_distinct_increasing_instants() {
    let raw = "timestamp,duration,notes\n\
               2025-09-04 14:30,60,a\n\
               2025-09-04 14:30,45,b\n\
               2025-09-04 14:30,30,c\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records.len(), 3);

    let ts: Vec<i64> = out.records.iter().map(|r| r.timestamp).collect();
    assert!(ts.windows(2).all(|w| w[0] < w[1]), "instants must be unique");

    // de-collided instants still sit inside the same local minute
    for r in &out.records {
        let stamp = format_local(r.timestamp, pacific()).unwrap();
        assert_eq!(stamp.date, "2025-09-04");
        assert!(stamp.time.starts_with("2:30:0"), "got {}", stamp.time);
    }
}

#[test]
fn records_are_sorted_by_instant() {
    let raw = "timestamp,duration,notes\n\
               2025-09-06 10:00,60,later\n\
               2025-09-04 14:30,60,earlier\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records[0].notes, "earlier");
    assert_eq!(out.records[1].notes, "later");
}

#[test]
fn empty_duration_becomes_failure_with_raw_row() {
    let raw = "timestamp,duration,notes\n2025-09-05 10:00,,missing duration\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert!(out.records.is_empty());
    assert_eq!(out.failures.len(), 1);
    assert!(out.failures[0].contains("Empty duration"));
    assert!(out.failures[0].contains("2025-09-05 10:00,,missing duration"));
}

#[test]
fn structural_failures_never_abort_the_batch() {
    let raw = "timestamp,duration,notes\n\
               not-a-date,60,x\n\
               2025-09-05 10:00,sixty,y\n\
               2025-09-05 11:00,0,z\n\
               2025-09-05 12:00,60,survivor\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].notes, "survivor");
    assert_eq!(out.failures.len(), 3);
    assert!(out.failures[0].contains("Invalid date format (not-a-date)"));
    assert!(out.failures[1].contains("Invalid duration (sixty)"));
    assert!(out.failures[2].contains("Non-positive duration"));
}

#[test]
fn empty_note_defaults_to_import_tag() {
    let raw = "timestamp,duration,notes\n2025-09-04 14:30,60,\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records[0].notes, DEFAULT_IMPORT_NOTE);
}

#[test]
fn slash_dates_and_second_precision_are_accepted() {
    let raw = "timestamp,duration,notes\n\
               09/04/2025 14:30:45,60,padded\n\
               2025-09-04T15:00:10,45,iso\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert_eq!(out.records.len(), 2);
    assert!(out.failures.is_empty());

    let first = format_local(out.records[0].timestamp, pacific()).unwrap();
    assert_eq!(first.time, "2:30:45 PM");
}

#[test]
fn dst_gap_rows_become_failures() {
    // 02:30 does not exist on 2024-03-10 in Pacific
    let raw = "timestamp,duration,notes\n2024-03-10 02:30,60,gap\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();

    assert!(out.records.is_empty());
    assert_eq!(out.failures.len(), 1);
    assert!(out.failures[0].contains("Unresolvable local time"));
}

#[test]
fn empty_patient_is_rejected() {
    let raw = "timestamp,duration,notes\n2025-09-04 14:30,60,x\n";
    assert!(parse_csv(raw, "  ", pacific()).is_err());
}

#[test]
fn store_batches_reports_rejected_duplicates() {
    let mut pool = temp_pool("ingest_dup");

    let a = Seizure::new("kat", 1_000, 60, "a");
    let dup = Seizure::new("kat", 1_000, 45, "b");

    let mut failures = Vec::new();
    let stored = store_batches(&mut pool, &[a, dup], &mut failures).unwrap();

    assert_eq!(stored, 1);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("Storage rejected"));
    assert!(failures[0].contains("duration=45"));
}

#[test]
fn store_batches_chunks_above_the_batch_limit() {
    let mut pool = temp_pool("ingest_chunks");

    let records: Vec<Seizure> = (0..(BATCH_SIZE * 2 + 3))
        .map(|i| Seizure::new("kat", 1_000_000 + i as i64, 60, "bulk"))
        .collect();

    let mut failures = Vec::new();
    let stored = store_batches(&mut pool, &records, &mut failures).unwrap();

    assert_eq!(stored, BATCH_SIZE * 2 + 3);
    assert!(failures.is_empty());
}

#[test]
fn parse_and_store_failures_accumulate_across_phases() {
    let mut pool = temp_pool("ingest_two_phase");

    // one structural failure at parse time
    let raw = "timestamp,duration,notes\n\
               2025-09-04 14:30,60,ok\n\
               garbage,60,x\n";
    let out = parse_csv(raw, "kat", pacific()).unwrap();
    let mut failures = out.failures;
    assert_eq!(failures.len(), 1);

    // pre-seed the db so the valid record is rejected at store time
    let clash = Seizure::new("kat", out.records[0].timestamp, 10, "already there");
    store_batches(&mut pool, &[clash], &mut Vec::new()).unwrap();

    let stored = store_batches(&mut pool, &out.records, &mut failures).unwrap();

    assert_eq!(stored, 0);
    assert_eq!(failures.len(), 2);
}

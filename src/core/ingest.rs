//! CSV ingestion: parse a diary export into seizure records and write them
//! in bounded batches.
//!
//! Every failure is recovered locally: a bad row becomes one `failures`
//! entry carrying the reason and the raw row text, and parsing moves on.
//! Nothing in this module aborts the batch.

use crate::db::pool::DbPool;
use crate::db::queries::batch_insert_seizures;
use crate::errors::{AppError, AppResult};
use crate::models::seizure::Seizure;
use crate::utils::time::local_to_utc;
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use std::collections::HashMap;

/// The storage collaborator accepts at most this many records per batch
/// write.
pub const BATCH_SIZE: usize = 25;

/// Note text assigned to rows whose note column is empty.
pub const DEFAULT_IMPORT_NOTE: &str = "CSV Import";

/// Accepted layouts for the timestamp column. The source carries no UTC
/// offsets: every value is a wall-clock reading in the configured zone.
const CSV_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

pub struct Ingested {
    pub records: Vec<Seizure>,
    pub failures: Vec<String>,
}

struct ParsedRow {
    naive: NaiveDateTime,
    timestamp: i64,
    duration: i64,
    notes: String,
}

fn parse_local_stamp(s: &str) -> Option<NaiveDateTime> {
    CSV_DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

/// Parse a CSV blob into seizure records for `patient`.
///
/// The first row is a header and is discarded. Data rows hold three
/// columns: local timestamp text, duration in seconds, note text. Rows
/// that collide on the same local minute get incrementing one-second
/// offsets in timestamp order, so `(patient, timestamp)` stays unique
/// without moving any record out of its minute.
pub fn parse_csv(raw: &str, patient: &str, tz: Tz) -> AppResult<Ingested> {
    if patient.trim().is_empty() {
        return Err(AppError::EmptyPatient);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut failures: Vec<String> = Vec::new();
    let mut parsed: Vec<ParsedRow> = Vec::new();

    for rec in rdr.records() {
        let rec = match rec {
            Ok(r) => r,
            Err(e) => {
                failures.push(format!("Unreadable row: {}", e));
                continue;
            }
        };

        // Skip blank lines the reader let through.
        if rec.iter().all(|f| f.is_empty()) {
            continue;
        }

        let raw_row = rec.iter().collect::<Vec<_>>().join(",");

        if rec.len() < 2 {
            failures.push(format!("Wrong field count ({}): {}", rec.len(), raw_row));
            continue;
        }

        let time_str = rec.get(0).unwrap_or("");
        let duration_str = rec.get(1).unwrap_or("");
        let notes = rec.get(2).unwrap_or("");

        let Some(naive) = parse_local_stamp(time_str) else {
            failures.push(format!("Invalid date format ({}): {}", time_str, raw_row));
            continue;
        };

        if duration_str.is_empty() {
            failures.push(format!("Empty duration: {}", raw_row));
            continue;
        }

        let duration = match duration_str.parse::<i64>() {
            Ok(d) if d > 0 => d,
            Ok(d) => {
                failures.push(format!("Non-positive duration ({}): {}", d, raw_row));
                continue;
            }
            Err(_) => {
                failures.push(format!("Invalid duration ({}): {}", duration_str, raw_row));
                continue;
            }
        };

        // A wall-clock reading inside a DST gap cannot denote an instant.
        let timestamp = match local_to_utc(naive, tz) {
            Ok(ts) => ts,
            Err(e) => {
                failures.push(format!("Unresolvable local time ({}): {}", e, raw_row));
                continue;
            }
        };

        parsed.push(ParsedRow {
            naive,
            timestamp,
            duration,
            notes: if notes.is_empty() {
                DEFAULT_IMPORT_NOTE.to_string()
            } else {
                notes.to_string()
            },
        });
    }

    parsed.sort_by_key(|r| r.timestamp);

    // De-collide same-minute rows: each row after the first in its local
    // minute gets the next one-second offset, in sorted order. Offsets are
    // added to already-sorted instants, so they stay strictly increasing
    // within the minute.
    let mut minute_offsets: HashMap<String, i64> = HashMap::new();
    let mut records = Vec::with_capacity(parsed.len());

    for row in parsed {
        let minute_key = row.naive.format("%Y-%m-%dT%H:%M").to_string();
        let offset = minute_offsets.entry(minute_key).or_insert(0);

        let mut s = Seizure::new(patient, row.timestamp + *offset, row.duration, &row.notes);
        s.source = "csv".to_string();
        records.push(s);

        *offset += 1;
    }

    Ok(Ingested { records, failures })
}

/// Write records in bounded batches.
///
/// One group's failure never blocks the remaining groups: a wholesale
/// batch error degrades every item in that group to a failure entry, and
/// individually rejected items are reported back with enough detail
/// (timestamp, duration, note) for a manual retry. Returns the number of
/// records actually stored.
pub fn store_batches(
    pool: &mut DbPool,
    records: &[Seizure],
    failures: &mut Vec<String>,
) -> AppResult<usize> {
    let mut stored = 0;

    for batch in records.chunks(BATCH_SIZE) {
        match batch_insert_seizures(&mut pool.conn, batch) {
            Ok(rejected) => {
                stored += batch.len() - rejected.len();
                for s in rejected {
                    failures.push(format!(
                        "Storage rejected: ts={}, duration={}, notes={}",
                        s.timestamp, s.duration, s.notes
                    ));
                }
            }
            Err(e) => {
                for s in batch {
                    failures.push(format!(
                        "Storage batch error ({}): ts={}, duration={}, notes={}",
                        e, s.timestamp, s.duration, s.notes
                    ));
                }
            }
        }
    }

    Ok(stored)
}

//! Mirror reconciliation: locate the spreadsheet rows that denote one
//! stored event, so they can be deleted when the event is.
//!
//! The mirror has no stable row identifier. Rows are matched by
//! reconstructing a composite key (date + duration + note) under the
//! mirror's lossy text formats, then deleted from the highest row index
//! down so that every pending index stays valid. The row-index space is
//! invalidated by any concurrent delete: run at most one fetch-then-delete
//! sequence per table at a time.

use crate::errors::AppResult;
use crate::mirror::Mirror;
use crate::models::sheet_row::SheetRow;
use crate::utils::time::{local_datetime, local_to_utc};
use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// The two date layouts the mirror is known to hold, tried in order.
const SHEET_DATE_FORMATS: &[&str] = &["%m/%d/%Y %H:%M", "%m/%d/%Y %H:%M:%S"];

/// Note normalization before comparison: trim whitespace, then strip at
/// most one trailing colon. Kept deliberately narrow — anything broader
/// risks matching (and deleting) the wrong row.
pub fn clean_note(note: &str) -> String {
    let t = note.trim();
    t.strip_suffix(':').unwrap_or(t).to_string()
}

fn parse_sheet_date(s: &str) -> Option<NaiveDateTime> {
    SHEET_DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
}

/// All snapshot rows denoting the same logical event as the target,
/// ordered by row index descending.
///
/// The target instant is first rendered in the mirror's own minute-precision
/// text format and re-parsed through it, exactly as the rows are, so both
/// sides of the comparison have been through the same lossy round trip.
/// Rows whose date text matches neither layout are skipped, not fatal.
/// Zero matches is a normal outcome.
pub fn find_matches(
    target_ts: i64,
    duration: i64,
    notes: &str,
    snapshot: &[SheetRow],
    tz: Tz,
) -> AppResult<Vec<SheetRow>> {
    let target_text = local_datetime(target_ts, tz)?
        .format("%m/%d/%Y %H:%M")
        .to_string();

    let target = match parse_sheet_date(&target_text).map(|n| local_to_utc(n, tz)) {
        Some(Ok(ts)) => ts,
        _ => return Ok(Vec::new()),
    };

    let target_note = clean_note(notes);
    let mut matches: Vec<SheetRow> = Vec::new();

    for row in snapshot {
        let Some(naive) = parse_sheet_date(&row.date_text) else {
            continue;
        };
        let Ok(row_ts) = local_to_utc(naive, tz) else {
            continue;
        };
        let Ok(row_duration) = row.duration_text.trim().parse::<i64>() else {
            continue;
        };

        if row_ts == target
            && row_duration == duration
            && clean_note(&row.note_text) == target_note
        {
            matches.push(row.clone());
        }
    }

    matches.sort_by(|a, b| b.row_num.cmp(&a.row_num));
    Ok(matches)
}

/// Fetch a fresh snapshot and find the rows for one event.
/// A snapshot fetch failure is fatal to the whole call.
pub fn find_mirror_rows(
    mirror: &dyn Mirror,
    target_ts: i64,
    duration: i64,
    notes: &str,
    tz: Tz,
) -> AppResult<Vec<SheetRow>> {
    let snapshot = mirror.fetch_rows()?;
    find_matches(target_ts, duration, notes, &snapshot, tz)
}

/// Delete matched rows from the mirror, highest row index first.
///
/// A row that fails to delete is reported in the returned list and does
/// not abort the remaining deletions.
pub fn delete_matches(mirror: &dyn Mirror, matches: &[SheetRow]) -> Vec<String> {
    let mut failures = Vec::new();

    for row in matches {
        if let Err(e) = mirror.delete_row(row.row_num) {
            failures.push(format!("Row {} not deleted: {}", row.row_num, e));
        }
    }

    failures
}

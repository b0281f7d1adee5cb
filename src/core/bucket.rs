//! Daily bucketing: fold an event sequence into dense per-day counts,
//! where "day" means a calendar day in the configured local zone.

use crate::errors::AppResult;
use crate::models::daily_count::DailyCount;
use crate::models::seizure::Seizure;
use crate::utils::date::days_between;
use crate::utils::time::{format_local, local_datetime, utc_now};
use chrono_tz::Tz;
use std::collections::HashMap;

/// Default charting window when none is given: six weeks back from now.
pub const DEFAULT_WINDOW_SECS: i64 = 42 * 86_400;

/// Bucket `events` into one count per local calendar day, from the window
/// start's local date through today inclusive.
pub fn bucket_by_local_day(
    events: &[Seizure],
    window_start: Option<i64>,
    tz: Tz,
) -> AppResult<Vec<DailyCount>> {
    let now = utc_now();
    let start = window_start.unwrap_or(now - DEFAULT_WINDOW_SECS);
    bucket_between(events, start, now, tz)
}

/// Deterministic inner bucketing over an explicit `[window_start, now]`.
///
/// Both bounds are raw UTC instants; neither is pre-aligned to a local day
/// boundary. The date range steps one calendar day at a time, so days
/// shortened or stretched by a DST transition still appear exactly once.
/// Events whose local date falls outside the window are silently ignored,
/// and zero events still produce the full zero-filled window.
pub fn bucket_between(
    events: &[Seizure],
    window_start: i64,
    now: i64,
    tz: Tz,
) -> AppResult<Vec<DailyCount>> {
    let first = local_datetime(window_start, tz)?.date_naive();
    let last = local_datetime(now, tz)?.date_naive();

    let days = days_between(first, last);

    let mut counts: HashMap<String, u32> = HashMap::with_capacity(days.len());
    for d in &days {
        counts.insert(d.format("%Y-%m-%d").to_string(), 0);
    }

    for ev in events {
        let date = format_local(ev.timestamp, tz)?.date;
        if let Some(c) = counts.get_mut(&date) {
            *c += 1;
        }
    }

    // `days` is already ascending, and lexicographic order on YYYY-MM-DD
    // equals chronological order.
    Ok(days
        .iter()
        .map(|d| {
            let date = d.format("%Y-%m-%d").to_string();
            let count = counts[&date];
            DailyCount { date, count }
        })
        .collect())
}

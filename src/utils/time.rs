//! Time utilities: UTC instants vs. the configured local calendar day.
//!
//! All "local" semantics in the application go through one IANA zone
//! (`Config::zone()`), passed in explicitly. Nothing here reads the system
//! timezone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// An instant rendered in the local zone: `YYYY-MM-DD` date plus a
/// 12-hour clock time with AM/PM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    pub date: String,
    pub time: String,
}

/// Current instant in UTC seconds since epoch.
pub fn utc_now() -> i64 {
    Utc::now().timestamp()
}

/// Parse an IANA zone id ("America/Los_Angeles", ...).
pub fn parse_timezone(id: &str) -> AppResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| AppError::Config(format!("Unknown timezone id '{}'", id)))
}

/// Resolve an instant to a zone-aware datetime.
/// Instants outside chrono's representable range are rejected, never guessed.
pub fn local_datetime(ts: i64, tz: Tz) -> AppResult<DateTime<Tz>> {
    match Utc.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&tz)),
        _ => Err(AppError::InvalidTimestamp(ts)),
    }
}

/// Format an instant as local date and 12-hour time strings.
pub fn format_local(ts: i64, tz: Tz) -> AppResult<LocalStamp> {
    let local = local_datetime(ts, tz)?;
    Ok(LocalStamp {
        date: local.format("%Y-%m-%d").to_string(),
        time: local.format("%-I:%M:%S %p").to_string(),
    })
}

/// UTC seconds of local midnight starting the instant's calendar day.
///
/// The boundary is computed in local time and converted back, so it stays
/// aligned to local midnight across DST transitions, where a day spans
/// 23 or 25 UTC hours rather than a fixed 86400 seconds.
pub fn local_day_start(ts: i64, tz: Tz) -> AppResult<i64> {
    let local = local_datetime(ts, tz)?;
    local_to_utc(local.date_naive().and_time(NaiveTime::MIN), tz)
}

/// UTC seconds of the last second (23:59:59 local) of the instant's
/// calendar day, i.e. one second before the next local midnight.
pub fn local_day_end(ts: i64, tz: Tz) -> AppResult<i64> {
    let local = local_datetime(ts, tz)?;
    let next = local
        .date_naive()
        .succ_opt()
        .ok_or(AppError::InvalidTimestamp(ts))?;
    Ok(local_to_utc(next.and_time(NaiveTime::MIN), tz)? - 1)
}

/// Interpret a naive wall-clock reading as the local zone and return the
/// UTC instant it denotes.
///
/// DST resolution is engine-defined: an ambiguous (fall-back) reading maps
/// to the earliest offset chrono-tz reports for it, a nonexistent
/// (spring-forward gap) reading is rejected as an invalid date.
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> AppResult<i64> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => Err(AppError::InvalidDate(
            naive.format("%Y-%m-%d %H:%M:%S").to_string(),
        )),
    }
}

/// Parse a wall-clock time of day, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

use serde::Serialize;

/// Number of events on one local calendar day.
///
/// Always derived fresh from an event sequence plus a window start; never
/// persisted. A bucketed series is dense: one entry per day in the window,
/// zero-count days included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
}

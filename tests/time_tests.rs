use chrono::NaiveDateTime;
use chrono_tz::Tz;
use seizelog::utils::time::{
    format_local, local_day_end, local_day_start, local_to_utc, parse_timezone,
};

fn pacific() -> Tz {
    parse_timezone("America/Los_Angeles").expect("valid zone")
}

fn naive(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid naive datetime")
}

#[test]
fn format_local_renders_pacific_date_and_time() {
    // 2024-02-10 05:26:15 UTC is 2024-02-09 21:26:15 in Pacific
    let stamp = format_local(1_707_542_775, pacific()).unwrap();
    assert_eq!(stamp.date, "2024-02-09");
    assert_eq!(stamp.time, "9:26:15 PM");
}

#[test]
fn local_to_utc_converts_wall_clock_readings() {
    let ts = local_to_utc(naive("2024-02-09 21:26:15"), pacific()).unwrap();
    assert_eq!(ts, 1_707_542_775);
}

#[test]
fn wall_clock_round_trip_outside_transitions() {
    let tz = pacific();

    for ts in [1_707_542_775_i64, 1_700_000_000, 1_720_000_000] {
        let stamp = format_local(ts, tz).unwrap();
        let rebuilt = NaiveDateTime::parse_from_str(
            &format!("{} {}", stamp.date, stamp.time),
            "%Y-%m-%d %I:%M:%S %p",
        )
        .expect("rendered stamp parses back");

        assert_eq!(local_to_utc(rebuilt, tz).unwrap(), ts);
    }
}

#[test]
fn day_boundaries_align_to_local_midnight() {
    let tz = pacific();

    // midnight Pacific on 2024-02-09 is 08:00 UTC
    let start = local_day_start(1_707_542_775, tz).unwrap();
    assert_eq!(start, 1_707_465_600);

    // plain winter day: exactly 24 hours
    let end = local_day_end(1_707_542_775, tz).unwrap();
    assert_eq!(end, start + 24 * 3600 - 1);
}

#[test]
fn spring_forward_day_spans_23_hours() {
    let tz = pacific();

    // 2024-03-10: clocks jump from 02:00 to 03:00
    let noon = local_to_utc(naive("2024-03-10 12:00:00"), tz).unwrap();
    let start = local_day_start(noon, tz).unwrap();
    let end = local_day_end(noon, tz).unwrap();

    assert_eq!(end - start + 1, 23 * 3600);
}

#[test]
fn fall_back_day_spans_25_hours() {
    let tz = pacific();

    let noon = local_to_utc(naive("2024-11-03 12:00:00"), tz).unwrap();
    let start = local_day_start(noon, tz).unwrap();
    let end = local_day_end(noon, tz).unwrap();

    assert_eq!(end - start + 1, 25 * 3600);
}

#[test]
fn gap_reading_is_rejected() {
    // 02:30 does not exist on 2024-03-10 in Pacific
    assert!(local_to_utc(naive("2024-03-10 02:30:00"), pacific()).is_err());
}

#[test]
fn ambiguous_reading_resolves_to_earliest_offset() {
    let tz = pacific();

    // 01:30 happens twice on 2024-11-03; the earliest reading is still PDT
    let ts = local_to_utc(naive("2024-11-03 01:30:00"), tz).unwrap();
    let before = local_to_utc(naive("2024-11-03 00:30:00"), tz).unwrap();

    assert_eq!(ts, before + 3600);
    assert_eq!(format_local(ts, tz).unwrap().time, "1:30:00 AM");
}

#[test]
fn out_of_range_instant_is_rejected() {
    assert!(format_local(i64::MAX, pacific()).is_err());
    assert!(local_day_start(i64::MAX, pacific()).is_err());
}

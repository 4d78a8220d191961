use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use taskdesk::utils::datetime::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(day(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date(" 2025-07-15 ").unwrap(), day(2025, 7, 15));
    assert!(parse_date("15/07/2025").is_err());
    assert!(parse_date("2025-02-30").is_err());
}

#[test]
fn test_parse_due_rfc3339() {
    let due = parse_due("2025-07-15T10:00:00.000Z").unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap());

    // Offsets are normalized to UTC
    let due = parse_due("2025-07-15T12:30:00+02:00").unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2025, 7, 15, 10, 30, 0).unwrap());
}

#[test]
fn test_parse_due_without_zone_and_bare_date() {
    let due = parse_due("2025-07-15T08:15:00").unwrap();
    assert_eq!(due.hour(), 8);

    let due = parse_due("2025-07-15").unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap());
}

#[test]
fn test_parse_due_rejects_garbage() {
    assert!(parse_due("").is_none());
    assert!(parse_due("   ").is_none());
    assert!(parse_due("next tuesday").is_none());
}

#[test]
fn test_due_from_date_uses_fixed_time() {
    let due = due_from_date(day(2025, 3, 1));
    assert_eq!(due.date_naive(), day(2025, 3, 1));
    assert_eq!((due.hour(), due.minute()), DUE_TIME_OF_DAY);
}

#[test]
fn test_format_due_iso() {
    let due = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    assert_eq!(format_due_iso(&due), "2025-07-15T10:00:00.000Z");
}

#[test]
fn test_format_due() {
    let due = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    assert_eq!(format_due(Some(&due), DUE_DATE_FORMAT), "2025-07-15");
    assert_eq!(format_due(Some(&due), "%d/%m"), "15/07");
    assert_eq!(format_due(None, DUE_DATE_FORMAT), "—");
}

#[test]
fn test_format_human_date_near_days() {
    let today = day(2025, 1, 13); // Monday
    assert_eq!(format_human_date_from(today, today), "today");
    assert_eq!(format_human_date_from(day(2025, 1, 14), today), "tomorrow");
    assert_eq!(format_human_date_from(day(2025, 1, 12), today), "yesterday");
    assert_eq!(format_human_date_from(day(2025, 1, 17), today), "next Friday");
    assert_eq!(format_human_date_from(day(2025, 1, 9), today), "last Thursday");
}

#[test]
fn test_format_human_date_far_days() {
    let today = day(2025, 1, 13);
    assert_eq!(format_human_date_from(day(2025, 1, 25), today), "in 12 days");
    assert_eq!(format_human_date_from(day(2025, 1, 1), today), "12 days ago");
    assert_eq!(format_human_date_from(day(2025, 6, 1), today), "Jun 01");
    assert_eq!(format_human_date_from(day(2026, 6, 1), today), "Jun 01, 2026");
}

#[test]
fn test_format_today_is_parseable() {
    assert!(parse_date(&format_today()).is_ok());
}

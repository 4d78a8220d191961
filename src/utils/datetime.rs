//! Date and time utility functions
//!
//! Due dates travel over the wire as ISO-8601 timestamps but are edited and
//! displayed as bare calendar dates. This module converts between the two and
//! renders human-readable labels ("today", "tomorrow", "next Friday").

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc, Weekday};

/// Calendar date format used by the backend and the edit forms
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time of day attached to due dates created from a bare date
pub const DUE_TIME_OF_DAY: (u32, u32) = (10, 0);

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DUE_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DUE_DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Parse a due date as sent by the backend.
///
/// Accepts RFC 3339 timestamps (`2025-07-15T10:00:00.000Z`) and bare dates
/// (`2025-07-15`, read as midnight UTC). Anything else yields `None`.
pub fn parse_due(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    parse_date(value)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Build the timestamp sent for a due date picked in a form.
pub fn due_from_date(date: NaiveDate) -> DateTime<Utc> {
    let (hour, minute) = DUE_TIME_OF_DAY;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Serialize a due date the way the backend expects it.
pub fn format_due_iso(due: &DateTime<Utc>) -> String {
    due.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a due date with a strftime format, or a dash when absent.
pub fn format_due(due: Option<&DateTime<Utc>>, date_format: &str) -> String {
    match due {
        Some(dt) => dt.date_naive().format(date_format).to_string(),
        None => "—".to_string(),
    }
}

/// Format a date relative to today in human-readable form
pub fn format_human_date(date: NaiveDate) -> String {
    format_human_date_from(date, Local::now().date_naive())
}

/// Format a date relative to an explicit reference day
pub fn format_human_date_from(input_date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(input_date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(input_date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if input_date.year() == today.year() {
                input_date.format("%b %d").to_string()
            } else {
                input_date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter for optional timestamps (`#[serde(with = "...")]`).
pub mod serde_timestamp {
    use super::{format_due_iso, parse_due};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format_due_iso(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_due))
    }
}

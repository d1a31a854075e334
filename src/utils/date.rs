use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Parse an export timestamp.
///
/// Accepts RFC 3339 (`2024-08-31T14:30:00Z`, fractional seconds, offsets)
/// and naive `YYYY-MM-DDTHH:MM:SS[.f]`, read as UTC. Anything else is `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `"August 2024"`, or `""` for a missing date.
pub fn month_label(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// `"August 2024"` for the month containing `d`.
pub fn month_label_of(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// Short upper-case weekday, e.g. `"SAT"`.
pub fn day_name(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%a").to_string().to_uppercase())
        .unwrap_or_default()
}

pub fn day_number(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| d.day().to_string()).unwrap_or_default()
}

/// `"Saturday, August 31, 2024"`.
pub fn format_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// `"2:30 PM"`.
pub fn format_time(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Calendar key (`YYYY-MM-DD`) of a timestamp.
pub fn date_key(dt: &DateTime<Utc>) -> NaiveDate {
    dt.date_naive()
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let last = month_last_day(year, month).unwrap_or(0);
    (1..=last)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// First day of the month containing `d`.
pub fn month_start(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// First day of the month before the one starting at `d`.
pub fn previous_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 1 {
        (d.year() - 1, 12)
    } else {
        (d.year(), d.month() - 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
}

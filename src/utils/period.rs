//! Period expressions used by `--period`.
//!
//! Accepted forms:
//! - YYYY
//! - YYYY-MM
//! - YYYY-MM-DD
//! - YYYY:YYYY
//! - YYYY-MM:YYYY-MM
//! - YYYY-MM-DD:YYYY-MM-DD

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Inclusive date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }
}

pub fn parse_period(r: &str) -> AppResult<Period> {
    let r = r.trim();

    let (start, end) = if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have same format"));
        }

        (bounds(start, r)?.0, bounds(end, r)?.1)
    } else {
        bounds(r, r)?
    };

    if start > end {
        return Err(invalid(r, "start is after end"));
    }

    Ok(Period { start, end })
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds(s: &str, whole: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(whole, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(whole, "invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = s
                .get(0..4)
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| invalid(whole, "invalid year"))?;
            let m: u32 = s
                .get(5..7)
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| invalid(whole, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(whole, "invalid month"))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(whole, "invalid month"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(whole, "invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| invalid(whole, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(whole, "unsupported format")),
    }
}

fn invalid(period: &str, reason: &str) -> AppError {
    AppError::InvalidPeriod(format!("'{period}': {reason}"))
}

use crate::models::Entry;
use crate::utils::date::{all_days_of_month, date_key, month_label_of, month_start, previous_month};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One day cell. All entries of the date stay attached for click-through.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a Entry>,
    /// Thumbnail of the first entry of the day, if it has one.
    pub photo: Option<&'a str>,
}

impl CalendarDay<'_> {
    pub fn has_entry(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// A month of day cells, Sunday-first.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub label: String,
    /// Blank cells before day 1 (weekday of the 1st, Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay<'a>>,
}

impl MonthGrid<'_> {
    pub fn entry_days(&self) -> usize {
        self.days.iter().filter(|d| d.has_entry()).count()
    }
}

/// Month grids from the newest dated entry's month down to the oldest's,
/// one per calendar month even when a month has no entries.
///
/// Undated entries are left out of the calendar.
pub fn build_calendar_index<'a, I>(entries: I) -> Vec<MonthGrid<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<&'a Entry>> = BTreeMap::new();
    for entry in entries {
        if let Some(dt) = &entry.creation_date {
            by_date.entry(date_key(dt)).or_default().push(entry);
        }
    }

    let (Some(oldest), Some(newest)) = (
        by_date.keys().next().copied(),
        by_date.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let last = month_start(oldest);
    let mut grids = Vec::new();
    let mut current = Some(month_start(newest));

    while let Some(first) = current.filter(|m| *m >= last) {
        grids.push(month_grid(first, &by_date));
        current = previous_month(first);
    }

    grids
}

fn month_grid<'a>(first: NaiveDate, by_date: &BTreeMap<NaiveDate, Vec<&'a Entry>>) -> MonthGrid<'a> {
    let days = all_days_of_month(first.year(), first.month())
        .into_iter()
        .map(|date| {
            let entries = by_date.get(&date).cloned().unwrap_or_default();
            let photo = entries.first().and_then(|e| e.thumbnail());
            CalendarDay {
                date,
                entries,
                photo,
            }
        })
        .collect();

    MonthGrid {
        year: first.year(),
        month: first.month(),
        label: month_label_of(first),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

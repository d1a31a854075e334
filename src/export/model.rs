//! Flat rows for the view exports.
//!
//! Lists are joined with `"; "` so every row also fits a CSV record.

use crate::core::DisplaySettings;
use crate::core::projection::{MapMarker, MediaItem, MonthGrid, MonthGroup, TimelineRow};
use crate::core::text;
use crate::utils::date::{date_key, format_date, month_label};
use crate::utils::media_url;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct TimelineExport {
    pub month: String,
    pub uuid: String,
    pub date: String,
    pub day_name: String,
    pub day_number: String,
    pub title: String,
    pub preview: String,
    pub tags: String,
    pub location: String,
    pub thumbnail: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct CalendarExport {
    pub month: String,
    pub date: String,
    pub entries: usize,
    pub photo: String,
    pub titles: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct MediaExport {
    pub uuid: String,
    pub date: String,
    pub month: String,
    pub media_type: String,
    pub url: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct MapExport {
    pub uuid: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub date: String,
    pub photo: String,
}

pub(crate) fn timeline_rows(groups: &[MonthGroup<'_>], settings: &DisplaySettings) -> Vec<TimelineExport> {
    groups
        .iter()
        .flat_map(|g| {
            g.entries.iter().map(move |e| {
                let row = TimelineRow::from_entry(e, settings);
                TimelineExport {
                    month: g.label.clone(),
                    uuid: row.uuid,
                    date: iso_date(e.creation_date.as_ref()),
                    day_name: row.day_name,
                    day_number: row.day_number,
                    title: row.title,
                    preview: row.preview,
                    tags: row.tags.join("; "),
                    location: row.location,
                    thumbnail: row.thumbnail_url.unwrap_or_default(),
                }
            })
        })
        .collect()
}

/// One row per day of every month grid, including days without entries.
pub(crate) fn calendar_rows(months: &[MonthGrid<'_>], settings: &DisplaySettings) -> Vec<CalendarExport> {
    months
        .iter()
        .flat_map(|m| {
            m.days.iter().map(move |d| CalendarExport {
                month: m.label.clone(),
                date: d.date.format("%Y-%m-%d").to_string(),
                entries: d.entries.len(),
                photo: d
                    .photo
                    .map(|f| media_url(&settings.media_path, f))
                    .unwrap_or_default(),
                titles: d
                    .entries
                    .iter()
                    .map(|e| text::title(&e.text))
                    .collect::<Vec<_>>()
                    .join("; "),
            })
        })
        .collect()
}

pub(crate) fn media_rows(items: &[MediaItem<'_>], settings: &DisplaySettings) -> Vec<MediaExport> {
    items
        .iter()
        .map(|i| {
            let dt = i.entry.creation_date.as_ref();
            MediaExport {
                uuid: i.entry.uuid.clone(),
                date: iso_date(dt),
                month: month_label(dt),
                media_type: i.media_type.to_string(),
                url: media_url(&settings.media_path, i.filename),
            }
        })
        .collect()
}

pub(crate) fn map_rows(markers: &[MapMarker<'_>], settings: &DisplaySettings) -> Vec<MapExport> {
    markers
        .iter()
        .map(|m| MapExport {
            uuid: m.entry.uuid.clone(),
            latitude: m.latitude,
            longitude: m.longitude,
            title: m.popup.title.clone(),
            date: format_date(m.entry.creation_date.as_ref()),
            photo: m
                .popup
                .photo_url(&settings.media_path)
                .unwrap_or_default(),
        })
        .collect()
}

fn iso_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| date_key(d).to_string()).unwrap_or_default()
}

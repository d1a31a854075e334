use crate::core::DisplaySettings;
use crate::core::text;
use crate::models::Entry;
use crate::utils::date::{day_name, day_number, month_label};
use crate::utils::{location_label, media_url};
use serde::Serialize;

/// Contiguous run of entries sharing a month label.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup<'a> {
    /// `"August 2024"`, or `""` for undated entries.
    pub label: String,
    pub entries: Vec<&'a Entry>,
}

/// Group entries by month label, keeping input order.
///
/// A new group starts whenever the label differs from the previous entry's
/// label; groups are never merged.
pub fn group_by_month<'a, I>(entries: I) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();

    for entry in entries {
        let label = month_label(entry.creation_date.as_ref());

        match groups.last_mut() {
            Some(group) if group.label == label => group.entries.push(entry),
            _ => groups.push(MonthGroup {
                label,
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// One line of the timeline list.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineRow {
    pub uuid: String,
    pub day_name: String,
    pub day_number: String,
    pub title: String,
    pub preview: String,
    pub tags: Vec<String>,
    pub location: String,
    pub thumbnail_url: Option<String>,
}

impl TimelineRow {
    pub fn from_entry(entry: &Entry, settings: &DisplaySettings) -> Self {
        let dt = entry.creation_date.as_ref();
        Self {
            uuid: entry.uuid.clone(),
            day_name: day_name(dt),
            day_number: day_number(dt),
            title: text::title(&entry.text),
            preview: text::preview(&entry.text),
            tags: entry.tags.clone(),
            location: location_label(entry.location.as_ref()),
            thumbnail_url: entry
                .thumbnail()
                .map(|f| media_url(&settings.media_path, f)),
        }
    }
}

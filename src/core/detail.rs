use crate::core::{DisplaySettings, text};
use crate::models::Entry;
use crate::utils::date::{format_date, format_time};
use crate::utils::{location_label, media_url, weather_label};
use serde::Serialize;

/// Everything the detail panel / overlay shows for one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailView {
    pub uuid: String,
    /// URLs of every attachment that has a file, in order.
    pub photos: Vec<String>,
    pub title: String,
    /// Raw markdown without line index 0.
    pub body: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub weather: String,
    pub tags: Vec<String>,
}

impl DetailView {
    /// No text to show (photos and metadata are not considered).
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}

pub fn detail_projection(entry: &Entry, settings: &DisplaySettings) -> DetailView {
    let dt = entry.creation_date.as_ref();

    DetailView {
        uuid: entry.uuid.clone(),
        photos: entry
            .attachments
            .iter()
            .filter_map(|a| a.file())
            .map(|f| media_url(&settings.media_path, f))
            .collect(),
        title: text::title(&entry.text),
        body: text::body(&entry.text),
        date: format_date(dt),
        time: format_time(dt),
        location: location_label(entry.location.as_ref()),
        weather: weather_label(entry.weather.as_ref(), settings.temperature_unit),
        tags: entry.tags.clone(),
    }
}

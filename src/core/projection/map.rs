use crate::core::text;
use crate::models::Entry;
use crate::utils::date::format_date;
use crate::utils::media_url;
use serde::Serialize;

/// Popup content shown for a marker.
#[derive(Debug, Clone, Serialize)]
pub struct PopupSummary<'a> {
    pub title: String,
    pub date: String,
    /// Filename of the first photo, relative to the media directory.
    pub photo: Option<&'a str>,
}

impl PopupSummary<'_> {
    /// URL of the first photo under `media_path`.
    pub fn photo_url(&self, media_path: &str) -> Option<String> {
        self.photo.map(|f| media_url(media_path, f))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker<'a> {
    pub entry: &'a Entry,
    pub latitude: f64,
    pub longitude: f64,
    pub popup: PopupSummary<'a>,
}

/// Markers for entries carrying both coordinates. Order carries no meaning.
pub fn build_map_index<'a, I>(entries: I) -> Vec<MapMarker<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let (latitude, longitude) = entry.coordinates()?;
            Some(MapMarker {
                entry,
                latitude,
                longitude,
                popup: PopupSummary {
                    title: text::title(&entry.text),
                    date: format_date(entry.creation_date.as_ref()),
                    photo: entry.thumbnail(),
                },
            })
        })
        .collect()
}

/// Bounding box of a marker set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn of(markers: &[MapMarker<'_>]) -> Option<Self> {
        let first = markers.first()?;
        let init = Bounds {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };

        Some(markers.iter().fold(init, |b, m| Bounds {
            south: b.south.min(m.latitude),
            west: b.west.min(m.longitude),
            north: b.north.max(m.latitude),
            east: b.east.max(m.longitude),
        }))
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}

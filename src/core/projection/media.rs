use crate::models::{Entry, MediaFilter};
use serde::Serialize;

/// Gallery tile: an entry whose first attachment has a file.
#[derive(Debug, Clone, Serialize)]
pub struct MediaItem<'a> {
    pub entry: &'a Entry,
    /// Type of attachment 0 (`"photo"` when missing).
    pub media_type: &'a str,
    pub filename: &'a str,
}

impl MediaItem<'_> {
    pub fn is_visible(&self, filter: &MediaFilter) -> bool {
        filter.matches(self.media_type)
    }
}

/// Entries with a non-empty first-attachment filename, in store order.
pub fn build_media_index<'a, I>(entries: I) -> Vec<MediaItem<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let first = entry.first_attachment()?;
            let filename = first.file()?;
            Some(MediaItem {
                entry,
                media_type: first.media_type(),
                filename,
            })
        })
        .collect()
}

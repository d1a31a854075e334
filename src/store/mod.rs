//! Read-only entry store: the single source of truth for every view.

mod filter;

pub use filter::EntryFilter;

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, ExportDocument, Journal};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    export_date: Option<String>,
    journals: Vec<Journal>,
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Build a store from an already parsed document. Entry order is kept
    /// as exported (newest first); it is never re-sorted.
    pub fn from_document(doc: ExportDocument) -> Self {
        Self {
            export_date: doc.export_date,
            journals: doc.journals,
            entries: doc.entries,
        }
    }

    /// Load the export file from disk.
    pub fn open(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let store = Self::parse(&content).map_err(|e| AppError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            entries = store.entries.len(),
            journals = store.journals.len(),
            path = %path.display(),
            "journal data loaded"
        );

        Ok(store)
    }

    /// Parse a document given either as plain JSON or as the embeddable
    /// script form `const JOURNAL_DATA = { ... };`.
    pub fn parse(content: &str) -> AppResult<Self> {
        let json = unwrap_script(content)
            .ok_or_else(|| AppError::Other("no JSON object found".to_string()))?;
        let doc: ExportDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(doc))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn journals(&self) -> &[Journal] {
        &self.journals
    }

    pub fn export_date(&self) -> Option<&str> {
        self.export_date.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest entry (index 0 of the exported order).
    pub fn newest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn find(&self, uuid: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.uuid == uuid)
    }

    /// Entries matching `filter`, in store order.
    pub fn filtered<'a>(&'a self, filter: &'a EntryFilter) -> impl Iterator<Item = &'a Entry> {
        self.entries.iter().filter(move |e| filter.matches(e))
    }
}

/// JSON object contained in `content`: the whole text when it already is
/// one, otherwise the span between the first `{` and the last `}`.
fn unwrap_script(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed.starts_with('{') {
        return Some(trimmed);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (end > start).then(|| &trimmed[start..=end])
}

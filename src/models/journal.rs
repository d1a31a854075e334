use super::entry::Entry;
use serde::{Deserialize, Serialize};

/// Journal metadata. Entries point at it through `journalUuid`, unchecked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub id: i64,
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// The whole export file: `{ exportDate, journals, entries }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub journals: Vec<Journal>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

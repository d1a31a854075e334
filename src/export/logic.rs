use crate::core::DisplaySettings;
use crate::core::projection::{
    build_calendar_index, build_map_index, build_media_index, group_by_month,
};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{calendar_rows, map_rows, media_rows, timeline_rows};
use crate::models::{Entry, View};
use crate::store::{EntryFilter, EntryStore};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export of a derived view.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of `view`, derived from the entries matching `scope`.
    ///
    /// `file` must be an absolute path. Returns the number of rows written.
    pub fn export(
        store: &EntryStore,
        scope: &EntryFilter,
        settings: &DisplaySettings,
        view: View,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let entries: Vec<&Entry> = store.filtered(scope).collect();
        tracing::debug!(view = %view, format = format.as_str(), entries = entries.len(), "exporting");

        match view {
            View::Timeline => {
                let groups = group_by_month(entries.iter().copied());
                write(&timeline_rows(&groups, settings), format, path)
            }
            View::Calendar => {
                let months = build_calendar_index(entries.iter().copied());
                write(&calendar_rows(&months, settings), format, path)
            }
            View::Media => {
                let items = build_media_index(entries.iter().copied());
                write(&media_rows(&items, settings), format, path)
            }
            View::Map => {
                let markers = build_map_index(entries.iter().copied());
                write(&map_rows(&markers, settings), format, path)
            }
        }
    }
}

fn write<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No rows found for the selected view and period.");
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}

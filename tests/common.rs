#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rjournalview::core::projection::{MapMarker, MediaItem, MonthGrid, MonthGroup};
use rjournalview::core::{DetailView, DisplaySettings, MapWidget, RenderSurface};
use rjournalview::errors::AppResult;
use rjournalview::models::{DetailPlacement, MediaFilter};
use rjournalview::store::EntryStore;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointing at an empty temp dir so a user
/// configuration file never leaks into the assertions.
pub fn rjv() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rjournalview_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rjournalview");
    cmd.env("HOME", &home);
    cmd
}

/// Four entries, newest first:
/// - `e1` Aug 31 2024, photo, full location and weather, starred
/// - `e2` Aug 14 2024, video, markdown title
/// - `e3` Jun 2 2024 (naive timestamp), attachment without file
/// - `e4` undated, empty text, latitude only
pub const SAMPLE_JSON: &str = r##"{
  "exportDate": "2024-09-01T10:00:00Z",
  "journals": [
    { "id": 1, "uuid": "J1", "name": "Journal" },
    { "id": 2, "uuid": "J2", "name": "Travel" }
  ],
  "entries": [
    {
      "uuid": "e1",
      "text": "Beach Day\n\nSwam at Lanikai.\nSunset walk.",
      "creationDate": "2024-08-31T14:30:00Z",
      "starred": true,
      "journalName": "Journal",
      "journalUuid": "J1",
      "attachments": [
        { "uuid": "a1", "type": "photo", "filename": "a1.jpg", "width": 800, "height": 600 },
        { "uuid": "a2", "type": "photo", "filename": "a2.jpg" }
      ],
      "location": {
        "place_name": "Lanikai Beach",
        "locality": "Kailua",
        "admin_area": "Hawaii",
        "country": "United States",
        "latitude": 21.3931,
        "longitude": -157.7154
      },
      "weather": { "conditions": "Partly Cloudy", "temp_celsius": 28.0 },
      "tags": ["beach", "summer"]
    },
    {
      "uuid": "e2",
      "text": "# Morning *notes*\nCoffee with [Ana](https://example.org)",
      "creationDate": "2024-08-14T09:00:00.000Z",
      "journalName": "Journal",
      "attachments": [
        { "uuid": "v1", "type": "video", "filename": "v1.mov" }
      ],
      "location": { "place_name": "Honolulu", "latitude": 21.3069, "longitude": -157.8583 },
      "tags": ["work"]
    },
    {
      "uuid": "e3",
      "text": "Road trip",
      "creationDate": "2024-06-02T18:00:00",
      "journalName": "Travel",
      "attachments": [
        { "uuid": "p3", "type": "photo", "filename": null }
      ],
      "tags": []
    },
    {
      "uuid": "e4",
      "text": "",
      "location": { "latitude": 10.0 }
    }
  ]
}"##;

pub fn sample_store() -> EntryStore {
    EntryStore::parse(SAMPLE_JSON).expect("parse sample document")
}

pub fn settings() -> DisplaySettings {
    DisplaySettings {
        media_path: "media/".to_string(),
        ..DisplaySettings::default()
    }
}

/// Write `content` to a fresh file in the system temp dir and return its path.
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rjournalview.{}", name, ext));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

pub fn sample_fixture(name: &str) -> String {
    write_fixture(name, "json", SAMPLE_JSON)
}

/// Temporary output file path inside the temp dir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Surface recording every call as a short string.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<String>,
    pub details: Vec<(DetailView, DetailPlacement)>,
}

impl RecordingSurface {
    pub fn count(&self, prefix: &str) -> usize {
        self.calls.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn last_detail(&self) -> Option<&DetailView> {
        self.details.last().map(|(d, _)| d)
    }
}

impl RenderSurface for RecordingSurface {
    fn render_timeline(
        &mut self,
        groups: &[MonthGroup<'_>],
        selected: Option<&str>,
        _settings: &DisplaySettings,
    ) -> AppResult<()> {
        self.calls.push(format!(
            "timeline:{}:{}",
            groups.len(),
            selected.unwrap_or("-")
        ));
        Ok(())
    }

    fn render_calendar(&mut self, months: &[MonthGrid<'_>]) -> AppResult<()> {
        self.calls.push(format!("calendar:{}", months.len()));
        Ok(())
    }

    fn render_media(
        &mut self,
        items: &[MediaItem<'_>],
        filter: &MediaFilter,
        _settings: &DisplaySettings,
    ) -> AppResult<()> {
        let visible = items.iter().filter(|i| i.is_visible(filter)).count();
        self.calls
            .push(format!("media:{}:{}/{}", filter, visible, items.len()));
        Ok(())
    }

    fn render_map(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        self.calls.push(format!("map:{}", markers.len()));
        Ok(())
    }

    fn show_detail(&mut self, detail: &DetailView, placement: DetailPlacement) -> AppResult<()> {
        self.calls
            .push(format!("detail:{}:{:?}", detail.uuid, placement));
        self.details.push((detail.clone(), placement));
        Ok(())
    }

    fn hide_overlay(&mut self) -> AppResult<()> {
        self.calls.push("hide".to_string());
        Ok(())
    }

    fn show_empty_state(&mut self, message: &str) -> AppResult<()> {
        self.calls.push(format!("empty:{message}"));
        Ok(())
    }
}

/// Map widget counting placements and fits.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub placed: usize,
    pub fits: usize,
    pub last_markers: usize,
}

impl MapWidget for RecordingMap {
    fn place_markers(
        &mut self,
        markers: &[MapMarker<'_>],
        _default_center: (f64, f64),
        _default_zoom: u8,
    ) -> AppResult<()> {
        self.placed += 1;
        self.last_markers = markers.len();
        Ok(())
    }

    fn fit_to_markers(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        self.fits += 1;
        self.last_markers = markers.len();
        Ok(())
    }
}

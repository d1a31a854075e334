use crate::config::MapConfig;
use crate::core::projection::{Bounds, MapMarker};
use crate::core::surface::MapWidget;
use crate::errors::AppResult;
use crate::utils::formatting::truncate_chars;
use crate::utils::table::{Column, Table};
use serde::Serialize;
use std::f64::consts::PI;
use std::io::Write;

const TILE_SIZE: f64 = 256.0;
const MAX_ZOOM: u8 = 19;
/// Pixel size assumed for the map viewport when fitting.
const VIEWPORT_PX: (f64, f64) = (800.0, 600.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub center: (f64, f64),
    pub uuids: Vec<String>,
    pub titles: Vec<String>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.uuids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uuids.is_empty()
    }
}

/// Map widget for the terminal: fits a web-mercator viewport to the
/// markers and groups the markers closer than `cluster_radius` pixels.
pub struct TerminalMap<W: Write> {
    out: W,
    cluster_radius: f64,
    padding: f64,
    viewport: Option<Viewport>,
    clusters: Vec<Cluster>,
    fit_count: usize,
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W, cfg: &MapConfig) -> Self {
        Self {
            out,
            cluster_radius: f64::from(cfg.cluster_radius),
            padding: f64::from(cfg.fit_padding),
            viewport: None,
            clusters: Vec::new(),
            fit_count: 0,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// How many times the viewport has been fitted.
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self) -> AppResult<()> {
        let Some(vp) = self.viewport else {
            return Ok(());
        };

        writeln!(
            self.out,
            "🗺️  viewport {:.4}, {:.4} @ zoom {} · {} clusters",
            vp.center.0,
            vp.center.1,
            vp.zoom,
            self.clusters.len()
        )?;

        let mut table = Table::new(vec![
            Column::right("SIZE", 5),
            Column::right("LAT", 10),
            Column::right("LON", 11),
            Column::new("ENTRIES", 40),
        ]);
        for c in &self.clusters {
            table.add_row(vec![
                c.len().to_string(),
                format!("{:.4}", c.center.0),
                format!("{:.4}", c.center.1),
                truncate_chars(&c.titles.join(" | "), 40),
            ]);
        }
        write!(self.out, "{}", table.render())?;
        Ok(())
    }
}

impl<W: Write> MapWidget for TerminalMap<W> {
    fn place_markers(
        &mut self,
        markers: &[MapMarker<'_>],
        default_center: (f64, f64),
        default_zoom: u8,
    ) -> AppResult<()> {
        self.viewport = Some(Viewport {
            center: default_center,
            zoom: default_zoom,
        });
        self.clusters = cluster(markers, default_zoom, self.cluster_radius);
        tracing::debug!(markers = markers.len(), "markers placed");
        Ok(())
    }

    fn fit_to_markers(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        let Some(bounds) = Bounds::of(markers) else {
            return Ok(());
        };

        let zoom = fit_zoom(&bounds, self.padding);
        self.viewport = Some(Viewport {
            center: bounds.center(),
            zoom,
        });
        self.clusters = cluster(markers, zoom, self.cluster_radius);
        self.fit_count += 1;

        self.print()
    }
}

/// Web-mercator pixel coordinates at `zoom`.
fn project(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powi(i32::from(zoom));
    let lat = lat.clamp(-85.0511, 85.0511).to_radians();
    let x = (lon + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// Highest zoom at which `bounds` plus padding fits the viewport.
fn fit_zoom(bounds: &Bounds, padding: f64) -> u8 {
    let avail_w = (VIEWPORT_PX.0 - 2.0 * padding).max(1.0);
    let avail_h = (VIEWPORT_PX.1 - 2.0 * padding).max(1.0);

    (0..=MAX_ZOOM)
        .rev()
        .find(|&z| {
            let (x1, y1) = project(bounds.north, bounds.west, z);
            let (x2, y2) = project(bounds.south, bounds.east, z);
            (x2 - x1).abs() <= avail_w && (y2 - y1).abs() <= avail_h
        })
        .unwrap_or(0)
}

/// Greedy distance clustering: each marker joins the first cluster whose
/// seed lies within `radius` pixels.
fn cluster(markers: &[MapMarker<'_>], zoom: u8, radius: f64) -> Vec<Cluster> {
    let mut seeds: Vec<(f64, f64)> = Vec::new();
    let mut clusters: Vec<(Cluster, f64, f64)> = Vec::new();

    for m in markers {
        let p = project(m.latitude, m.longitude, zoom);
        let hit = seeds
            .iter()
            .position(|s| ((s.0 - p.0).powi(2) + (s.1 - p.1).powi(2)).sqrt() <= radius);

        match hit {
            Some(i) => {
                let (c, lat_sum, lon_sum) = &mut clusters[i];
                c.uuids.push(m.entry.uuid.clone());
                c.titles.push(m.popup.title.clone());
                *lat_sum += m.latitude;
                *lon_sum += m.longitude;
            }
            None => {
                seeds.push(p);
                clusters.push((
                    Cluster {
                        center: (m.latitude, m.longitude),
                        uuids: vec![m.entry.uuid.clone()],
                        titles: vec![m.popup.title.clone()],
                    },
                    m.latitude,
                    m.longitude,
                ));
            }
        }
    }

    clusters
        .into_iter()
        .map(|(mut c, lat_sum, lon_sum)| {
            let n = c.len() as f64;
            c.center = (lat_sum / n, lon_sum / n);
            c
        })
        .collect()
}

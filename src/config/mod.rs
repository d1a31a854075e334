use crate::errors::{AppError, AppResult};
use crate::models::view::SurfaceClass;
use crate::utils::formatting::TemperatureUnit;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_media_path")]
    pub media_path: String,
    #[serde(default)]
    pub surface: SurfaceClass,
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub map: MapConfig,
}

/// Map widget settings (center of the USA, zoom 4 by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center")]
    pub default_center: (f64, f64),
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
    /// Cluster radius in pixels at the fitted zoom level.
    #[serde(default = "default_cluster_radius")]
    pub cluster_radius: u32,
    /// Padding in pixels kept around the markers when fitting.
    #[serde(default = "default_fit_padding")]
    pub fit_padding: u32,
}

fn default_title() -> String {
    "My Journal".to_string()
}
fn default_data_path() -> String {
    Config::config_dir()
        .join("data")
        .join("journal.json")
        .to_string_lossy()
        .to_string()
}
fn default_media_path() -> String {
    "./data/media/".to_string()
}
fn default_center() -> (f64, f64) {
    (39.8283, -98.5795)
}
fn default_zoom() -> u8 {
    4
}
fn default_cluster_radius() -> u32 {
    50
}
fn default_fit_padding() -> u32 {
    50
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: default_center(),
            default_zoom: default_zoom(),
            cluster_radius: default_cluster_radius(),
            fit_padding: default_fit_padding(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            data_path: default_data_path(),
            media_path: default_media_path(),
            surface: SurfaceClass::default(),
            temperature_unit: TemperatureUnit::default(),
            map: MapConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rjournalview")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rjournalview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rjournalview.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Data document path with `~/` expanded.
    pub fn data_file(&self) -> PathBuf {
        expand_tilde(&self.data_path)
    }

    /// Write the configuration file (creates the config directory).
    ///
    /// When `is_test` is set nothing is written and the would-be path is returned.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let file = Self::config_file();
        if is_test {
            return Ok(file);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut out = fs::File::create(&file)?;
        out.write_all(yaml.as_bytes())?;

        Ok(file)
    }
}

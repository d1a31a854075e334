pub mod coordinator;
pub mod detail;
pub mod projection;
pub mod selection;
pub mod session;
pub mod surface;
pub mod text;

use crate::config::Config;
use crate::utils::formatting::TemperatureUnit;

pub use coordinator::ViewCoordinator;
pub use detail::{DetailView, detail_projection};
pub use selection::SelectionController;
pub use session::Session;
pub use surface::{MapWidget, RenderSurface};

/// Presentation settings shared by the projections that produce labels/URLs.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub media_path: String,
    pub temperature_unit: TemperatureUnit,
    pub default_center: (f64, f64),
    pub default_zoom: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DisplaySettings {
    fn from(cfg: &Config) -> Self {
        Self {
            media_path: cfg.media_path.clone(),
            temperature_unit: cfg.temperature_unit,
            default_center: cfg.map.default_center,
            default_zoom: cfg.map.default_zoom,
        }
    }
}

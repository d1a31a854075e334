use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Timeline,
    Calendar,
    Media,
    Map,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Timeline => "timeline",
            View::Calendar => "calendar",
            View::Media => "media",
            View::Map => "map",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media gallery filter: everything, or a single attachment type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaFilter {
    #[default]
    All,
    Type(String),
}

impl MediaFilter {
    /// `"all"` (any case) selects everything, any other value is a type.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            MediaFilter::All
        } else {
            MediaFilter::Type(s.to_string())
        }
    }

    pub fn matches(&self, media_type: &str) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Type(t) => t == media_type,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaFilter::All => "all",
            MediaFilter::Type(t) => t,
        }
    }
}

impl fmt::Display for MediaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport class reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceClass {
    /// Persistent side panel for the selected entry.
    #[default]
    Wide,
    /// Transient overlay instead of a panel.
    Narrow,
}

/// Where the detail projection is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPlacement {
    Panel,
    Overlay,
}

impl SurfaceClass {
    pub fn placement(&self) -> DetailPlacement {
        match self {
            SurfaceClass::Wide => DetailPlacement::Panel,
            SurfaceClass::Narrow => DetailPlacement::Overlay,
        }
    }
}

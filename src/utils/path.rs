//! Path utilities: `~` expansion and media URLs.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Media URL of an attachment: base path and filename concatenated as-is.
pub fn media_url(base: &str, filename: &str) -> String {
    if filename.is_empty() {
        return String::new();
    }
    format!("{base}{filename}")
}

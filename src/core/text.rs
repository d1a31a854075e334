//! Title / preview / body extraction from the markdown entry text.

use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s*").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

const PREVIEW_CHARS: usize = 150;

/// First meaningful line, with markdown headers, emphasis and links removed.
/// Leading blank lines are skipped.
pub fn title(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = HEADER_RE.replace_all(text, "");
    let cleaned = cleaned.replace('*', "");
    let cleaned = LINK_RE.replace_all(&cleaned, "$1");

    cleaned
        .trim()
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Everything after line index 0 of the raw text.
///
/// A text starting with blank lines keeps its title line in the body,
/// unlike [`title`].
pub fn body(text: &str) -> String {
    match text.split_once('\n') {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    }
}

/// Non-blank lines after the first one, joined by a space, 150 chars max.
pub fn preview(text: &str) -> String {
    let joined = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    joined.chars().take(PREVIEW_CHARS).collect()
}

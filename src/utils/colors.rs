//! ANSI color helper utilities for terminal output.
use crate::models::View;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Accent colour of each top-level view header.
pub fn color_for_view(view: View) -> Colour {
    match view {
        View::Timeline => Colour::Blue,
        View::Calendar => Colour::Green,
        View::Media => Colour::Purple,
        View::Map => Colour::RGB(255, 153, 51), // orange
    }
}

/// Grey for an empty value, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Calendar cell: green with a photo, yellow with an entry, grey when empty.
pub fn colorize_day(day: &str, has_entry: bool, has_photo: bool) -> String {
    if has_photo {
        format!("{GREEN}{day}{RESET}")
    } else if has_entry {
        format!("{YELLOW}{day}{RESET}")
    } else {
        format!("{GREY}{day}{RESET}")
    }
}

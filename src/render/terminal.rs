use crate::core::DisplaySettings;
use crate::core::detail::DetailView;
use crate::core::projection::{MapMarker, MediaItem, MonthGrid, MonthGroup, TimelineRow};
use crate::core::surface::RenderSurface;
use crate::core::text;
use crate::errors::AppResult;
use crate::models::{DetailPlacement, MediaFilter, View};
use crate::utils::colors::{GREY, RESET, color_for_view, colorize_day, colorize_optional};
use crate::utils::date::{day_number, month_label};
use crate::utils::formatting::{bold, italic, pad_left, truncate_chars};
use crate::utils::media_url;
use crate::utils::table::{Column, Table};
use chrono::Datelike;
use std::io::Write;

const DEFAULT_WIDTH: usize = 80;
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Rendering surface printing every view as plain text to `out`.
///
/// Wide-surface details go to an in-memory panel, printed on demand with
/// [`TerminalSurface::print_panel`]; narrow-surface details are printed at
/// once, like an overlay popping up.
pub struct TerminalSurface<W: Write> {
    out: W,
    title: String,
    width: usize,
    panel: Option<DetailView>,
    overlay_open: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, title: &str) -> Self {
        Self {
            out,
            title: title.to_string(),
            width: DEFAULT_WIDTH,
            panel: None,
            overlay_open: false,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(20);
        self
    }

    pub fn panel(&self) -> Option<&DetailView> {
        self.panel.as_ref()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the persistent panel, if something is selected.
    pub fn print_panel(&mut self) -> AppResult<bool> {
        let Some(detail) = self.panel.take() else {
            return Ok(false);
        };
        let res = self.write_detail(&detail);
        self.panel = Some(detail);
        res.map(|_| true)
    }

    fn header(&mut self, view: View, subtitle: &str) -> AppResult<()> {
        let name = color_for_view(view).bold().paint(view.as_str().to_uppercase());
        writeln!(self.out, "{} · {}  {}", bold(&self.title), name, subtitle)?;
        writeln!(self.out, "{}", "─".repeat(self.width))?;
        Ok(())
    }

    fn empty(&mut self, message: &str) -> AppResult<()> {
        writeln!(self.out, "  {GREY}{message}{RESET}")?;
        Ok(())
    }

    fn write_detail(&mut self, d: &DetailView) -> AppResult<()> {
        writeln!(self.out, "{}", "═".repeat(self.width))?;

        for url in &d.photos {
            writeln!(self.out, "🖼  {url}")?;
        }

        if !d.date.is_empty() {
            writeln!(self.out, "{}", italic(&format!("{} at {}", d.date, d.time)))?;
        }
        writeln!(self.out, "{}", bold(&d.title))?;

        let body = d.body.trim_matches('\n');
        if !body.is_empty() {
            writeln!(self.out)?;
            for paragraph in body.split('\n') {
                writeln!(self.out, "{}", textwrap::fill(paragraph, self.width))?;
            }
        }

        writeln!(self.out)?;
        if !d.location.is_empty() {
            writeln!(self.out, "📍 {}", d.location)?;
        }
        if !d.weather.is_empty() {
            writeln!(self.out, "⛅ {}", d.weather)?;
        }
        if !d.tags.is_empty() {
            writeln!(self.out, "🏷  {}", d.tags.join(", "))?;
        }
        writeln!(self.out, "{}", "═".repeat(self.width))?;
        Ok(())
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn render_timeline(
        &mut self,
        groups: &[MonthGroup<'_>],
        selected: Option<&str>,
        settings: &DisplaySettings,
    ) -> AppResult<()> {
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        self.header(View::Timeline, &format!("{total} entries"))?;

        if groups.is_empty() {
            return self.empty("No entries found");
        }

        for group in groups {
            writeln!(self.out)?;
            writeln!(self.out, "{}", bold(&colorize_optional(&group.label)))?;

            for entry in &group.entries {
                let row = TimelineRow::from_entry(entry, settings);
                let marker = if selected == Some(row.uuid.as_str()) { "▶" } else { " " };

                writeln!(
                    self.out,
                    "{marker} {:<3} {} │ {}{}",
                    row.day_name,
                    pad_left(&row.day_number, 2),
                    row.title,
                    if row.thumbnail_url.is_some() { "  🖼" } else { "" },
                )?;

                if !row.preview.is_empty() {
                    let preview = truncate_chars(&row.preview, self.width.saturating_sub(10));
                    writeln!(self.out, "         │ {GREY}{preview}{RESET}")?;
                }

                let mut meta = Vec::new();
                if !row.tags.is_empty() {
                    meta.push(row.tags.join(", "));
                }
                if !row.location.is_empty() {
                    meta.push(format!("📍 {}", row.location));
                }
                if !meta.is_empty() {
                    writeln!(self.out, "         │ {}", meta.join("  "))?;
                }
            }
        }
        Ok(())
    }

    fn render_calendar(&mut self, months: &[MonthGrid<'_>]) -> AppResult<()> {
        self.header(View::Calendar, &format!("{} months", months.len()))?;

        if months.is_empty() {
            return self.empty("No entries found");
        }

        writeln!(self.out, "  legend: {GREY}31{RESET} none  31* entry  31+ photo")?;

        for grid in months {
            writeln!(self.out)?;
            writeln!(self.out, "{}", bold(&grid.label))?;
            writeln!(self.out, "{}", WEEKDAYS.map(|d| format!("{d:>3} ")).concat())?;

            let mut line = "    ".repeat(grid.leading_blanks as usize);
            let mut column = grid.leading_blanks;

            for day in &grid.days {
                let number = format!("{:>3}", day.date.day());
                let mark = if day.has_photo() {
                    "+"
                } else if day.has_entry() {
                    "*"
                } else {
                    " "
                };
                line.push_str(&colorize_day(
                    &format!("{number}{mark}"),
                    day.has_entry(),
                    day.has_photo(),
                ));

                column += 1;
                if column == 7 {
                    writeln!(self.out, "{}", line.trim_end())?;
                    line.clear();
                    column = 0;
                }
            }
            if !line.is_empty() {
                writeln!(self.out, "{}", line.trim_end())?;
            }

            for day in grid.days.iter().filter(|d| d.has_entry()) {
                let titles: Vec<String> = day
                    .entries
                    .iter()
                    .map(|e| text::title(&e.text))
                    .collect();
                writeln!(
                    self.out,
                    "  {} {}",
                    day.date.format("%Y-%m-%d"),
                    titles.join(" | ")
                )?;
            }
        }
        Ok(())
    }

    fn render_media(
        &mut self,
        items: &[MediaItem<'_>],
        filter: &MediaFilter,
        settings: &DisplaySettings,
    ) -> AppResult<()> {
        let visible: Vec<&MediaItem<'_>> = items.iter().filter(|i| i.is_visible(filter)).collect();
        self.header(
            View::Media,
            &format!("filter: {filter} ({} of {})", visible.len(), items.len()),
        )?;

        if items.is_empty() {
            return self.empty("No media found");
        }

        let mut table = Table::new(vec![
            Column::right("DAY", 4),
            Column::new("MONTH", 15),
            Column::new("TYPE", 6),
            Column::new("FILE", 40),
        ]);
        for item in &visible {
            let dt = item.entry.creation_date.as_ref();
            table.add_row(vec![
                day_number(dt),
                month_label(dt),
                item.media_type.to_string(),
                media_url(&settings.media_path, item.filename),
            ]);
        }
        write!(self.out, "{}", table.render())?;

        let hidden = items.len() - visible.len();
        if hidden > 0 {
            writeln!(self.out, "  {GREY}{hidden} hidden by filter{RESET}")?;
        }
        Ok(())
    }

    fn render_map(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        self.header(View::Map, &format!("{} entries with location", markers.len()))?;

        if markers.is_empty() {
            return self.empty("No entries with location");
        }

        let mut table = Table::new(vec![
            Column::right("LAT", 10),
            Column::right("LON", 11),
            Column::new("DATE", 30),
            Column::new("TITLE", 30),
        ]);
        for m in markers {
            table.add_row(vec![
                format!("{:.4}", m.latitude),
                format!("{:.4}", m.longitude),
                m.popup.date.clone(),
                truncate_chars(&m.popup.title, 30),
            ]);
        }
        write!(self.out, "{}", table.render())?;
        Ok(())
    }

    fn show_detail(&mut self, detail: &DetailView, placement: DetailPlacement) -> AppResult<()> {
        match placement {
            DetailPlacement::Panel => {
                self.panel = Some(detail.clone());
                Ok(())
            }
            DetailPlacement::Overlay => {
                self.overlay_open = true;
                self.write_detail(detail)
            }
        }
    }

    fn hide_overlay(&mut self) -> AppResult<()> {
        self.overlay_open = false;
        Ok(())
    }

    fn show_empty_state(&mut self, message: &str) -> AppResult<()> {
        writeln!(self.out, "📖 {message}")?;
        Ok(())
    }
}

//! Seams towards the outside world: whatever draws the views, and the map
//! widget that clusters markers.

use crate::core::DisplaySettings;
use crate::core::detail::DetailView;
use crate::core::projection::{MapMarker, MediaItem, MonthGrid, MonthGroup};
use crate::errors::AppResult;
use crate::models::{DetailPlacement, MediaFilter};

pub trait RenderSurface {
    fn render_timeline(
        &mut self,
        groups: &[MonthGroup<'_>],
        selected: Option<&str>,
        settings: &DisplaySettings,
    ) -> AppResult<()>;

    fn render_calendar(&mut self, months: &[MonthGrid<'_>]) -> AppResult<()>;

    /// Every item is passed; the surface hides those not matching `filter`.
    fn render_media(
        &mut self,
        items: &[MediaItem<'_>],
        filter: &MediaFilter,
        settings: &DisplaySettings,
    ) -> AppResult<()>;

    fn render_map(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()>;

    fn show_detail(&mut self, detail: &DetailView, placement: DetailPlacement) -> AppResult<()>;

    fn hide_overlay(&mut self) -> AppResult<()>;

    /// Terminal state after a failed load.
    fn show_empty_state(&mut self, message: &str) -> AppResult<()>;
}

pub trait MapWidget {
    /// Called once with the full marker set.
    fn place_markers(
        &mut self,
        markers: &[MapMarker<'_>],
        default_center: (f64, f64),
        default_zoom: u8,
    ) -> AppResult<()>;

    /// Fit the viewport to `markers`. Must be safe to call repeatedly.
    fn fit_to_markers(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()>;
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn render_timeline(
        &mut self,
        groups: &[MonthGroup<'_>],
        selected: Option<&str>,
        settings: &DisplaySettings,
    ) -> AppResult<()> {
        (**self).render_timeline(groups, selected, settings)
    }

    fn render_calendar(&mut self, months: &[MonthGrid<'_>]) -> AppResult<()> {
        (**self).render_calendar(months)
    }

    fn render_media(
        &mut self,
        items: &[MediaItem<'_>],
        filter: &MediaFilter,
        settings: &DisplaySettings,
    ) -> AppResult<()> {
        (**self).render_media(items, filter, settings)
    }

    fn render_map(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        (**self).render_map(markers)
    }

    fn show_detail(&mut self, detail: &DetailView, placement: DetailPlacement) -> AppResult<()> {
        (**self).show_detail(detail, placement)
    }

    fn hide_overlay(&mut self) -> AppResult<()> {
        (**self).hide_overlay()
    }

    fn show_empty_state(&mut self, message: &str) -> AppResult<()> {
        (**self).show_empty_state(message)
    }
}

impl<T: MapWidget + ?Sized> MapWidget for &mut T {
    fn place_markers(
        &mut self,
        markers: &[MapMarker<'_>],
        default_center: (f64, f64),
        default_zoom: u8,
    ) -> AppResult<()> {
        (**self).place_markers(markers, default_center, default_zoom)
    }

    fn fit_to_markers(&mut self, markers: &[MapMarker<'_>]) -> AppResult<()> {
        (**self).fit_to_markers(markers)
    }
}

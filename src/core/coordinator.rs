use crate::core::DisplaySettings;
use crate::core::projection::{
    build_calendar_index, build_map_index, build_media_index, group_by_month,
};
use crate::core::surface::{MapWidget, RenderSurface};
use crate::errors::AppResult;
use crate::models::{Entry, MediaFilter, View};

/// Inputs a view needs to be drawn.
pub struct ViewContext<'a> {
    pub entries: &'a [&'a Entry],
    pub selected: Option<&'a str>,
    pub settings: &'a DisplaySettings,
}

/// Owns the current top-level view and the media filter.
#[derive(Debug, Default)]
pub struct ViewCoordinator {
    /// `None` until the first activation.
    current: Option<View>,
    filter: MediaFilter,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<View> {
        self.current
    }

    pub fn media_filter(&self) -> &MediaFilter {
        &self.filter
    }

    /// Make `view` the visible view and draw it.
    ///
    /// Re-activating the current view draws nothing, except for the map which
    /// is re-fitted to its markers on every activation. Returns whether the
    /// view was (re)drawn.
    pub fn activate<S: RenderSurface, M: MapWidget>(
        &mut self,
        view: View,
        ctx: &ViewContext<'_>,
        surface: &mut S,
        map: &mut M,
    ) -> AppResult<bool> {
        if self.current == Some(view) {
            if view == View::Map {
                let markers = build_map_index(ctx.entries.iter().copied());
                map.fit_to_markers(&markers)?;
            }
            return Ok(false);
        }

        tracing::debug!(from = ?self.current, to = %view, "activating view");
        self.current = Some(view);
        self.redraw(ctx, surface, map)?;
        Ok(true)
    }

    /// Change the media filter. The media index itself is untouched; the
    /// gallery is redrawn only while it is the visible view.
    pub fn set_media_filter<S: RenderSurface>(
        &mut self,
        filter: MediaFilter,
        ctx: &ViewContext<'_>,
        surface: &mut S,
    ) -> AppResult<bool> {
        if self.filter == filter {
            return Ok(false);
        }

        self.filter = filter;

        if self.current == Some(View::Media) {
            let items = build_media_index(ctx.entries.iter().copied());
            surface.render_media(&items, &self.filter, ctx.settings)?;
        }
        Ok(true)
    }

    /// Recompute and draw the current view only.
    pub fn redraw<S: RenderSurface, M: MapWidget>(
        &self,
        ctx: &ViewContext<'_>,
        surface: &mut S,
        map: &mut M,
    ) -> AppResult<()> {
        let entries = ctx.entries.iter().copied();

        match self.current {
            None => Ok(()),
            Some(View::Timeline) => {
                surface.render_timeline(&group_by_month(entries), ctx.selected, ctx.settings)
            }
            Some(View::Calendar) => surface.render_calendar(&build_calendar_index(entries)),
            Some(View::Media) => {
                surface.render_media(&build_media_index(entries), &self.filter, ctx.settings)
            }
            Some(View::Map) => {
                let markers = build_map_index(entries);
                surface.render_map(&markers)?;
                map.fit_to_markers(&markers)
            }
        }
    }
}

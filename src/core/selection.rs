use crate::core::DisplaySettings;
use crate::core::detail::detail_projection;
use crate::core::surface::RenderSurface;
use crate::errors::AppResult;
use crate::models::{DetailPlacement, Entry, SurfaceClass};
use crate::store::EntryStore;

/// Tracks the one entry shown in detail and where it is shown.
///
/// The selection is never cleared: a pick replaces it, a surface change only
/// moves it between the persistent panel (wide) and the overlay (narrow).
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
    surface: SurfaceClass,
    overlay_open: bool,
}

impl SelectionController {
    pub fn new(surface: SurfaceClass) -> Self {
        Self {
            selected: None,
            surface,
            overlay_open: false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn surface(&self) -> SurfaceClass {
        self.surface
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Select `entry_id` and show its detail.
    ///
    /// Unknown ids are ignored and the previous selection stays. Returns
    /// whether the selection was applied.
    pub fn select<S: RenderSurface>(
        &mut self,
        store: &EntryStore,
        entry_id: &str,
        settings: &DisplaySettings,
        surface: &mut S,
    ) -> AppResult<bool> {
        let Some(entry) = store.find(entry_id) else {
            tracing::debug!(entry_id, "ignoring selection of unknown entry");
            return Ok(false);
        };

        self.apply(entry, settings, surface)?;
        Ok(true)
    }

    /// Switch surface class, keeping the selection.
    ///
    /// Entering the wide surface without a selection picks `newest`, so a
    /// wide surface always has a selection once entries exist.
    pub fn set_surface<S: RenderSurface>(
        &mut self,
        class: SurfaceClass,
        store: &EntryStore,
        newest: Option<&Entry>,
        settings: &DisplaySettings,
        surface: &mut S,
    ) -> AppResult<()> {
        let previous = self.surface;
        self.surface = class;

        if class == previous {
            return self.reconcile(newest, settings, surface);
        }

        tracing::debug!(?previous, ?class, "surface class changed");

        match class {
            SurfaceClass::Wide => {
                if self.overlay_open {
                    self.overlay_open = false;
                    surface.hide_overlay()?;
                }

                let current = self.selected.as_deref().and_then(|id| store.find(id));
                match current {
                    Some(entry) => self.apply(entry, settings, surface),
                    None => self.reconcile(newest, settings, surface),
                }
            }
            // the panel goes away; the overlay only opens on the next pick
            SurfaceClass::Narrow => Ok(()),
        }
    }

    /// Establish the wide-surface invariant for the current class.
    pub fn reconcile<S: RenderSurface>(
        &mut self,
        newest: Option<&Entry>,
        settings: &DisplaySettings,
        surface: &mut S,
    ) -> AppResult<()> {
        if self.surface == SurfaceClass::Wide
            && self.selected.is_none()
            && let Some(entry) = newest
        {
            self.apply(entry, settings, surface)?;
        }
        Ok(())
    }

    /// Close the overlay. The selection is kept.
    pub fn dismiss<S: RenderSurface>(&mut self, surface: &mut S) -> AppResult<()> {
        if self.overlay_open {
            self.overlay_open = false;
            surface.hide_overlay()?;
        }
        Ok(())
    }

    fn apply<S: RenderSurface>(
        &mut self,
        entry: &Entry,
        settings: &DisplaySettings,
        surface: &mut S,
    ) -> AppResult<()> {
        self.selected = Some(entry.uuid.clone());

        let placement = self.surface.placement();
        self.overlay_open = placement == DetailPlacement::Overlay;

        let detail = detail_projection(entry, settings);
        surface.show_detail(&detail, placement)
    }
}

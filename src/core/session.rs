use crate::core::DisplaySettings;
use crate::core::coordinator::{ViewContext, ViewCoordinator};
use crate::core::projection::build_map_index;
use crate::core::selection::SelectionController;
use crate::core::surface::{MapWidget, RenderSurface};
use crate::errors::AppResult;
use crate::models::{Entry, MediaFilter, SurfaceClass, View};
use crate::store::{EntryFilter, EntryStore};
use std::path::Path;

pub const LOAD_FAILED_MESSAGE: &str =
    "Unable to load journal entries. Make sure you have exported your journal data.";

/// All mutable UI state, owned in one place.
///
/// The rendering surface calls back into `select`, `activate`,
/// `set_media_filter` and `set_surface`; every call completes synchronously.
pub struct Session<S: RenderSurface, M: MapWidget> {
    store: EntryStore,
    scope: EntryFilter,
    settings: DisplaySettings,
    selection: SelectionController,
    coordinator: ViewCoordinator,
    surface: S,
    map: M,
}

impl<S: RenderSurface, M: MapWidget> Session<S, M> {
    pub fn new(
        store: EntryStore,
        settings: DisplaySettings,
        surface_class: SurfaceClass,
        surface: S,
        map: M,
    ) -> Self {
        Self {
            store,
            scope: EntryFilter::default(),
            settings,
            selection: SelectionController::new(surface_class),
            coordinator: ViewCoordinator::new(),
            surface,
            map,
        }
    }

    /// Load the document at `path`. On failure the surface is left in the
    /// empty state and the error is returned; there is no retry.
    pub fn open(
        path: &Path,
        settings: DisplaySettings,
        surface_class: SurfaceClass,
        mut surface: S,
        map: M,
    ) -> AppResult<Self> {
        match EntryStore::open(path) {
            Ok(store) => Ok(Self::new(store, settings, surface_class, surface, map)),
            Err(e) => {
                tracing::error!(error = %e, "failed to load journal data");
                surface.show_empty_state(LOAD_FAILED_MESSAGE)?;
                Err(e)
            }
        }
    }

    /// Restrict every view to entries matching `scope`.
    pub fn with_scope(mut self, scope: EntryFilter) -> Self {
        if !scope.is_empty() {
            tracing::debug!(?scope, "entries scoped");
        }
        self.scope = scope;
        self
    }

    /// Hand markers to the map widget and establish the initial selection.
    /// No view is drawn until the first `activate`; the map is fitted when
    /// its view is activated.
    pub fn start(&mut self) -> AppResult<()> {
        let entries: Vec<&Entry> = self.store.filtered(&self.scope).collect();

        let markers = build_map_index(entries.iter().copied());
        self.map.place_markers(
            &markers,
            self.settings.default_center,
            self.settings.default_zoom,
        )?;

        self.selection
            .reconcile(entries.first().copied(), &self.settings, &mut self.surface)
    }

    pub fn activate(&mut self, view: View) -> AppResult<bool> {
        let entries: Vec<&Entry> = self.store.filtered(&self.scope).collect();
        let ctx = ViewContext {
            entries: &entries,
            selected: self.selection.selected(),
            settings: &self.settings,
        };
        self.coordinator
            .activate(view, &ctx, &mut self.surface, &mut self.map)
    }

    pub fn set_media_filter(&mut self, filter: MediaFilter) -> AppResult<bool> {
        let entries: Vec<&Entry> = self.store.filtered(&self.scope).collect();
        let ctx = ViewContext {
            entries: &entries,
            selected: self.selection.selected(),
            settings: &self.settings,
        };
        self.coordinator
            .set_media_filter(filter, &ctx, &mut self.surface)
    }

    pub fn select(&mut self, entry_id: &str) -> AppResult<bool> {
        let previous = self.selection.selected().map(str::to_owned);
        let applied =
            self.selection
                .select(&self.store, entry_id, &self.settings, &mut self.surface)?;
        if applied {
            self.refresh_marker(previous.as_deref())?;
        }
        Ok(applied)
    }

    pub fn set_surface(&mut self, class: SurfaceClass) -> AppResult<()> {
        let previous = self.selection.selected().map(str::to_owned);
        let newest = self.store.filtered(&self.scope).next();
        self.selection.set_surface(
            class,
            &self.store,
            newest,
            &self.settings,
            &mut self.surface,
        )?;
        self.refresh_marker(previous.as_deref())
    }

    /// The timeline marks the selected entry, so it is redrawn when the
    /// selection moves while it is the visible view.
    fn refresh_marker(&mut self, previous: Option<&str>) -> AppResult<()> {
        if self.coordinator.current() != Some(View::Timeline)
            || self.selection.selected() == previous
        {
            return Ok(());
        }

        let entries: Vec<&Entry> = self.store.filtered(&self.scope).collect();
        let ctx = ViewContext {
            entries: &entries,
            selected: self.selection.selected(),
            settings: &self.settings,
        };
        self.coordinator.redraw(&ctx, &mut self.surface, &mut self.map)
    }

    pub fn dismiss(&mut self) -> AppResult<()> {
        self.selection.dismiss(&mut self.surface)
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn scoped_entries(&self) -> Vec<&Entry> {
        self.store.filtered(&self.scope).collect()
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn surface_class(&self) -> SurfaceClass {
        self.selection.surface()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.selection.is_overlay_open()
    }

    pub fn current_view(&self) -> Option<View> {
        self.coordinator.current()
    }

    pub fn media_filter(&self) -> &MediaFilter {
        self.coordinator.media_filter()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Give back the surface and the map widget, ending the session.
    pub fn into_parts(self) -> (S, M) {
        (self.surface, self.map)
    }
}

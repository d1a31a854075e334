//! Pure projections of the entry store into the four view models.
//!
//! Every builder takes entries in store order and never re-sorts them.
//! Missing or malformed dates never fail a projection: they yield empty
//! labels or exclude the entry, depending on the view.

pub mod calendar;
pub mod map;
pub mod media;
pub mod timeline;

pub use calendar::{CalendarDay, MonthGrid, build_calendar_index};
pub use map::{Bounds, MapMarker, PopupSummary, build_map_index};
pub use media::{MediaItem, build_media_index};
pub use timeline::{MonthGroup, TimelineRow, group_by_month};

pub mod entry;
pub mod journal;
pub mod view;

pub use entry::{Attachment, Entry, Location, Weather};
pub use journal::{ExportDocument, Journal};
pub use view::{DetailPlacement, MediaFilter, SurfaceClass, View};

//! Terminal implementations of the rendering surface and the map widget.

pub mod map;
pub mod terminal;

pub use map::{Cluster, TerminalMap, Viewport};
pub use terminal::TerminalSurface;

pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod period;
pub mod table;

pub use formatting::{location_label, weather_label};
pub use path::media_url;

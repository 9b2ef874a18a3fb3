pub mod calendar;
pub mod label_format;
pub mod position_table;
pub mod scale_level;
pub mod time_converter;
pub mod viewport;

pub use calendar::Timestamp;
pub use label_format::{FocusLabelPattern, format_focus_label, format_period_label};
pub use position_table::convert_position;
pub use scale_level::ScaleLevel;
pub use time_converter::{ORIGIN_BIAS, time_to_units, units_to_time};
pub use viewport::{ViewportSize, ViewportState};

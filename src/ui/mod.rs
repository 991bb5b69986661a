// UI and formatting module

pub mod formatters;
pub mod json_lines;
pub mod overlay_tui;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_battery, format_network_label, format_percent, format_speed};
pub use json_lines::JsonLinesPresenter;
pub use overlay_tui::{run_overlay_app, OverlayAppConfig, TuiPresenter};

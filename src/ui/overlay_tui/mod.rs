//! Terminal rendition of the overlay panel.
//!
//! Draws the live bars, info, about and settings panes using ratatui.

mod app;
mod event_handler;
mod presenter;
mod render;
mod widgets;

pub use app::{run_overlay_app, OverlayAppConfig};
pub use event_handler::key_to_command;
pub use presenter::TuiPresenter;

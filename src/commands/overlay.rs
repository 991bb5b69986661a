//! Overlay command handler.
//!
//! Shows the live panel in the terminal.

use anyhow::{Context, Result};

use crate::core::config::OverlayConfig;
use crate::core::overlay::OverlayController;
use crate::ui::overlay_tui::{run_overlay_app, OverlayAppConfig, TuiPresenter};

use super::build_sampler;

/// Execute the overlay command
pub fn execute(config: &OverlayConfig) -> Result<()> {
    let (sampler, description) = build_sampler(config);
    let controller = OverlayController::new(sampler, config.appearance(), TuiPresenter::new());

    let app_config = OverlayAppConfig {
        clock_interval: config.clock_interval(),
        sample_interval: config.sample_interval(),
    };

    run_overlay_app(controller, &description, app_config).context("Failed to run overlay panel")
}

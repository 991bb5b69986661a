//! Info command handler.
//!
//! Prints the static system description once.

use anyhow::Result;

use crate::core::config::OverlayConfig;
use crate::core::gpu::GpuMonitor;
use crate::core::system_description::ABOUT_TEXT;
use crate::platform::{collect_system_description, detect_capabilities};

/// Execute the info command
pub fn execute(config: &OverlayConfig) -> Result<()> {
    let gpus = GpuMonitor::new(detect_capabilities(config));
    let description = collect_system_description(gpus.devices());

    for line in description.lines() {
        println!("{}", line);
    }
    println!();
    println!("{}", ABOUT_TEXT);

    Ok(())
}

// Command handlers module
pub mod info;
pub mod overlay;
pub mod stream;

// Re-exports for cleaner imports
pub use info::execute as info;
pub use overlay::execute as overlay;
pub use stream::execute as stream;

use crate::core::config::OverlayConfig;
use crate::core::gpu::GpuMonitor;
use crate::core::system_description::SystemDescription;
use crate::core::telemetry::{NetworkMeter, TelemetrySampler};
use crate::platform::{collect_system_description, detect_capabilities, HostTelemetry};

/// Wire the host telemetry source and GPU backends into a sampler,
/// together with the static description shown by the Info pane
pub fn build_sampler(config: &OverlayConfig) -> (TelemetrySampler, SystemDescription) {
    let source = HostTelemetry::new(config.disk_mount.clone());
    let sampler = TelemetrySampler::new(
        Box::new(source),
        GpuMonitor::new(detect_capabilities(config)),
        NetworkMeter::new(config.network_ceiling_kbps),
    );

    let gpus = sampler.gpus();
    log::info!(
        "GPU backend: {:?}, {} row(s), network ceiling {} KB/s",
        gpus.backend_kind(),
        gpus.slot_count(),
        sampler.network().ceiling_kbps()
    );

    let description = collect_system_description(gpus.devices());

    (sampler, description)
}

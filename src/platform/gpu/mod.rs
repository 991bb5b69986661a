//! GPU-specific platform code.
//!
//! Two backends are supported:
//! 1. NVIDIA (via NVML), the native backend
//! 2. Any DRM driver exposing `gpu_busy_percent` (Linux sysfs), the fallback

mod drm;
mod nvidia;

pub use drm::DrmBackend;
pub use nvidia::NvmlBackend;

use log::{info, warn};

use crate::core::config::OverlayConfig;
use crate::core::gpu::{GpuBackend, GpuCapabilities};

/// Probe which GPU backends initialise on this host
///
/// Runs once at startup; the result is handed to `GpuMonitor::new`.
pub fn detect_capabilities(config: &OverlayConfig) -> GpuCapabilities {
    let native = if config.enable_native_gpu {
        match NvmlBackend::init() {
            Ok(backend) => Some(Box::new(backend) as Box<dyn GpuBackend>),
            Err(e) => {
                warn!("Native GPU backend unavailable: {}", e);
                None
            }
        }
    } else {
        info!("Native GPU backend disabled");
        None
    };

    let fallback = if config.enable_fallback_gpu {
        match DrmBackend::open(&config.drm_root) {
            Ok(backend) => Some(Box::new(backend) as Box<dyn GpuBackend>),
            Err(e) => {
                warn!("Fallback GPU backend unavailable: {}", e);
                None
            }
        }
    } else {
        info!("Fallback GPU backend disabled");
        None
    };

    GpuCapabilities { native, fallback }
}

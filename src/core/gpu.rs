//! GPU enumeration and per-tick utilization.
//!
//! Backends live in the platform layer; this module decides which one is
//! used and keeps the device list stable for the whole session.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::telemetry::{clamp_percent, GpuSample};
use crate::error::Result;

/// Name of the synthetic slot shown when no GPU is detected
pub const PLACEHOLDER_GPU_NAME: &str = "GPU";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// Vendor library (NVML)
    Native,
    /// Cross-vendor kernel interface (DRM sysfs)
    Fallback,
}

/// A GPU found during enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuDevice {
    pub index: u32,
    pub name: String,
    pub memory_total_bytes: Option<u64>,
}

/// Trait for GPU utilization backends
///
/// Implementations are provided in the platform layer.
pub trait GpuBackend: Send {
    fn kind(&self) -> BackendKind;

    /// List devices in backend order
    fn enumerate(&mut self) -> Result<Vec<GpuDevice>>;

    /// Number of devices that can be queried right now
    fn queryable_count(&mut self) -> Result<usize>;

    /// Current utilization of the device at `index`, in percent
    fn device_utilization(&mut self, index: usize) -> Result<f32>;
}

/// Backends that initialised on this host, resolved once at startup.
#[derive(Default)]
pub struct GpuCapabilities {
    pub native: Option<Box<dyn GpuBackend>>,
    pub fallback: Option<Box<dyn GpuBackend>>,
}

impl GpuCapabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_native(&self) -> bool {
        self.native.is_some()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Owns the selected backend and the fixed device list.
pub struct GpuMonitor {
    backend: Option<Box<dyn GpuBackend>>,
    devices: Vec<GpuDevice>,
}

impl GpuMonitor {
    /// Resolve the backend and enumerate devices.
    ///
    /// The native backend wins when it lists at least one device; otherwise
    /// the fallback is asked. When both come back empty a single placeholder
    /// slot is kept so the panel layout never changes.
    pub fn new(capabilities: GpuCapabilities) -> Self {
        let GpuCapabilities { native, fallback } = capabilities;

        for mut backend in [native, fallback].into_iter().flatten() {
            let kind = backend.kind();
            match backend.enumerate() {
                Ok(devices) if !devices.is_empty() => {
                    info!("Using {:?} GPU backend with {} device(s)", kind, devices.len());
                    return Self {
                        backend: Some(backend),
                        devices,
                    };
                }
                Ok(_) => debug!("{:?} GPU backend reported no devices", kind),
                Err(e) => warn!("{:?} GPU backend enumeration failed: {}", kind, e),
            }
        }

        info!("No GPU detected, showing placeholder");
        Self {
            backend: None,
            devices: Vec::new(),
        }
    }

    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.backend.as_ref().map(|b| b.kind())
    }

    /// Devices found at startup (empty when the placeholder is in use)
    pub fn devices(&self) -> &[GpuDevice] {
        &self.devices
    }

    pub fn is_placeholder(&self) -> bool {
        self.devices.is_empty()
    }

    /// Number of rows the panel shows; never zero
    pub fn slot_count(&self) -> usize {
        self.devices.len().max(1)
    }

    /// Sample utilization for every enumerated slot, in enumeration order.
    ///
    /// Slots past the currently queryable count, or whose query fails, read
    /// 0 for this tick only.
    pub fn sample_utilization(&mut self) -> Vec<GpuSample> {
        let Some(backend) = self.backend.as_mut() else {
            return vec![GpuSample {
                device_index: 0,
                name: PLACEHOLDER_GPU_NAME.to_string(),
                utilization_percent: 0.0,
                placeholder: true,
            }];
        };

        let queryable = backend.queryable_count().unwrap_or_else(|e| {
            debug!("GPU device count query failed: {}", e);
            0
        });

        self.devices
            .iter()
            .enumerate()
            .map(|(slot, device)| {
                let utilization = if slot < queryable {
                    backend.device_utilization(slot).unwrap_or_else(|e| {
                        debug!("GPU {} utilization query failed: {}", device.index, e);
                        0.0
                    })
                } else {
                    0.0
                };

                GpuSample {
                    device_index: device.index,
                    name: device.name.clone(),
                    utilization_percent: clamp_percent(utilization as f64),
                    placeholder: false,
                }
            })
            .collect()
    }
}

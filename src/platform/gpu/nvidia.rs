#[cfg(feature = "nvml")]
use nvml_wrapper::{Device, Nvml};

use crate::core::gpu::{BackendKind, GpuBackend, GpuDevice};
use crate::error::{MonitorError, Result};

/// NVIDIA GPU backend using NVML
pub struct NvmlBackend {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
}

impl NvmlBackend {
    /// Initialize NVML
    ///
    /// Fails when the driver library is missing or incompatible.
    pub fn init() -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to init NVML: {}", e)))?;

            Ok(Self { nvml })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn device(&self, index: u32) -> Result<Device<'_>> {
        self.nvml.device_by_index(index).map_err(|e| {
            MonitorError::metric_collection(format!("Failed to get GPU device {}: {}", index, e))
        })
    }
}

impl GpuBackend for NvmlBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn enumerate(&mut self) -> Result<Vec<GpuDevice>> {
        #[cfg(feature = "nvml")]
        {
            let count = self.nvml.device_count().map_err(|e| {
                MonitorError::gpu_not_available(format!("Failed to get device count: {}", e))
            })?;

            let mut devices = Vec::with_capacity(count as usize);
            for index in 0..count {
                let device = self.device(index)?;
                let name = device
                    .name()
                    .unwrap_or_else(|_| "Unknown NVIDIA GPU".to_string());
                let memory_total_bytes = device.memory_info().ok().map(|m| m.total);

                devices.push(GpuDevice {
                    index,
                    name,
                    memory_total_bytes,
                });
            }

            Ok(devices)
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    fn queryable_count(&mut self) -> Result<usize> {
        #[cfg(feature = "nvml")]
        {
            self.nvml
                .device_count()
                .map(|count| count as usize)
                .map_err(|e| MonitorError::metric_collection(format!("Failed to get device count: {}", e)))
        }
        #[cfg(not(feature = "nvml"))]
        {
            Ok(0)
        }
    }

    fn device_utilization(&mut self, index: usize) -> Result<f32> {
        #[cfg(feature = "nvml")]
        {
            let device = self.device(index as u32)?;
            device
                .utilization_rates()
                .map(|u| u.gpu as f32)
                .map_err(|e| {
                    MonitorError::metric_collection(format!("Failed to get utilization: {}", e))
                })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}

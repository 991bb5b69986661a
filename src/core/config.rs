use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::appearance::{Appearance, SizePreset, Theme, DEFAULT_TRANSPARENCY};
use super::telemetry::DEFAULT_CEILING_KBPS;
use crate::error::{MonitorError, Result};

/// Shortest interval accepted for either tick, in milliseconds
pub const MIN_INTERVAL_MS: u64 = 100;

pub const DEFAULT_DRM_ROOT: &str = "/sys/class/drm";

#[cfg(windows)]
pub const DEFAULT_DISK_MOUNT: &str = "C:\\";
#[cfg(not(windows))]
pub const DEFAULT_DISK_MOUNT: &str = "/";

/// Runtime settings, built from the command line on every launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub sample_interval_ms: u64,
    pub clock_interval_ms: u64,
    /// Throughput shown as a full network bar, in KB/s
    pub network_ceiling_kbps: f64,
    /// Mount point whose usage feeds the disk bar
    pub disk_mount: PathBuf,
    pub theme: Theme,
    pub size: SizePreset,
    pub transparency: u8,
    pub enable_native_gpu: bool,
    pub enable_fallback_gpu: bool,
    pub drm_root: PathBuf,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            clock_interval_ms: 500,
            network_ceiling_kbps: DEFAULT_CEILING_KBPS,
            disk_mount: PathBuf::from(DEFAULT_DISK_MOUNT),
            theme: Theme::Dark,
            size: SizePreset::Small,
            transparency: DEFAULT_TRANSPARENCY,
            enable_native_gpu: true,
            enable_fallback_gpu: true,
            drm_root: PathBuf::from(DEFAULT_DRM_ROOT),
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms < MIN_INTERVAL_MS {
            return Err(MonitorError::config(format!(
                "Sample interval must be at least {}ms (got {}ms)",
                MIN_INTERVAL_MS, self.sample_interval_ms
            )));
        }

        if self.clock_interval_ms < MIN_INTERVAL_MS {
            return Err(MonitorError::config(format!(
                "Clock interval must be at least {}ms (got {}ms)",
                MIN_INTERVAL_MS, self.clock_interval_ms
            )));
        }

        if !self.network_ceiling_kbps.is_finite() || self.network_ceiling_kbps <= 0.0 {
            return Err(MonitorError::config(format!(
                "Network ceiling must be a positive number of KB/s (got {})",
                self.network_ceiling_kbps
            )));
        }

        Ok(())
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::new(self.theme, self.size, self.transparency)
    }
}

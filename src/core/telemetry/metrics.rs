use serde::{Deserialize, Serialize};

/// One tick worth of telemetry, ready for display.
///
/// Every percentage is already clamped to `[0, 100]`; NaN and infinities
/// coming from the OS are reported as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: i64, // Unix timestamp
    pub cpu_percent: f32,
    pub ram_percent: f32,
    pub disk_percent: f32,
    pub battery: BatteryReading,
    pub gpus: Vec<GpuSample>,
    pub network_percent: f32,
    /// Interface carrying the most traffic this tick, `None` when no
    /// interface has moved a single byte yet.
    pub network_interface: Option<String>,
    /// Measured throughput, `None` while the rate is unknown (first tick or
    /// top interface just changed).
    pub network_bytes_per_sec: Option<f64>,
}

impl MetricSample {
    pub fn battery_percent(&self) -> Option<u8> {
        match self.battery {
            BatteryReading::Present { percent, .. } => Some(percent),
            _ => None,
        }
    }

    pub fn battery_plugged(&self) -> Option<bool> {
        match self.battery {
            BatteryReading::Present { plugged, .. } => Some(plugged),
            _ => None,
        }
    }
}

/// Battery state as seen by the overlay.
///
/// `Absent` and `Unavailable` are kept apart from a 0% reading: a desktop
/// without a battery must never show up as an empty battery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BatteryReading {
    /// The host has no battery
    Absent,
    /// The battery query failed this tick
    #[default]
    Unavailable,
    Present { percent: u8, plugged: bool },
}

impl BatteryReading {
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            BatteryReading::Present { plugged: true, .. } => Some("Charging"),
            BatteryReading::Present { plugged: false, .. } => Some("On Battery"),
            _ => None,
        }
    }
}

/// Utilization of one enumerated GPU slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuSample {
    pub device_index: u32,
    pub name: String,
    pub utilization_percent: f32,
    /// Synthetic slot shown when no GPU could be detected
    #[serde(default)]
    pub placeholder: bool,
}

impl GpuSample {
    /// Row label used by the panels: `GPU0 (name)`, or plain `GPU` for the
    /// placeholder slot.
    pub fn label(&self) -> String {
        if self.placeholder {
            self.name.clone()
        } else {
            format!("GPU{} ({})", self.device_index, self.name)
        }
    }
}

/// Clamp a raw percentage into `[0, 100]`, mapping non-finite values to 0.
pub fn clamp_percent(value: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0) as f32
}

/// Integer percentage shown next to a bar.
///
/// Fractions are truncated toward zero, so 57.8 displays as 57.
pub fn display_percent(value: f64) -> u8 {
    clamp_percent(value).trunc() as u8
}

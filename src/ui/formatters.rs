use humansize::{format_size, BINARY};

use crate::core::telemetry::{display_percent, BatteryReading, GpuSample, MetricSample};

/// Percentage label shown next to a bar, e.g. `57%`
pub fn format_percent(value: f32) -> String {
    format!("{}%", display_percent(value as f64))
}

/// Battery line for the live panel
///
/// A host without a battery reads "No battery", never a 0% bar.
pub fn format_battery(battery: &BatteryReading) -> String {
    match battery {
        BatteryReading::Absent => "No battery".to_string(),
        BatteryReading::Unavailable => "Battery: --".to_string(),
        BatteryReading::Present {
            percent,
            plugged: true,
        } => format!("🔌 {}% (Charging)", percent),
        BatteryReading::Present {
            percent,
            plugged: false,
        } => format!("🔋 {}% (On Battery)", percent),
    }
}

/// Row label for the network bar: `NETWORK (eth0)` or plain `NETWORK`
pub fn format_network_label(sample: &MetricSample) -> String {
    match &sample.network_interface {
        Some(name) => format!("NETWORK ({})", name),
        None => "NETWORK".to_string(),
    }
}

/// Measured throughput, `--` while the rate is unknown
pub fn format_speed(bytes_per_sec: Option<f64>) -> String {
    match bytes_per_sec {
        Some(rate) if rate.is_finite() && rate >= 0.0 => {
            format!("{}/s", format_size(rate as u64, BINARY))
        }
        _ => "--".to_string(),
    }
}

/// `label: N%` line used by the plain-text renderers
pub fn format_gpu_line(gpu: &GpuSample) -> String {
    format!("{}: {}", gpu.label(), format_percent(gpu.utilization_percent))
}

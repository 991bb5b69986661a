use std::time::Instant;

use log::debug;

use crate::core::gpu::GpuMonitor;

use super::metrics::{clamp_percent, BatteryReading, MetricSample};
use super::network::NetworkMeter;
use super::source::TelemetrySource;

/// Produces one [`MetricSample`] per tick.
///
/// Owns the only state carried between ticks (the network meter). OS
/// failures are absorbed here: a failed read becomes 0 (or
/// [`BatteryReading::Unavailable`]) and the next tick starts clean.
pub struct TelemetrySampler {
    source: Box<dyn TelemetrySource>,
    gpus: GpuMonitor,
    network: NetworkMeter,
}

impl TelemetrySampler {
    pub fn new(source: Box<dyn TelemetrySource>, gpus: GpuMonitor, network: NetworkMeter) -> Self {
        Self {
            source,
            gpus,
            network,
        }
    }

    pub fn gpus(&self) -> &GpuMonitor {
        &self.gpus
    }

    pub fn network(&self) -> &NetworkMeter {
        &self.network
    }

    /// Sample every metric now
    pub fn sample(&mut self) -> MetricSample {
        self.sample_at(Instant::now())
    }

    /// Sample every metric, using `now` as the tick instant for rate math
    pub fn sample_at(&mut self, now: Instant) -> MetricSample {
        self.source.refresh();

        let cpu = self.source.cpu_percent().unwrap_or_else(|e| {
            debug!("CPU query failed: {}", e);
            0.0
        });

        let ram = self.source.ram_percent().unwrap_or_else(|e| {
            debug!("RAM query failed: {}", e);
            0.0
        });

        let disk = self.source.disk_percent().unwrap_or_else(|e| {
            debug!("Disk query failed: {}", e);
            0.0
        });

        let battery = match self.source.battery() {
            Ok(Some(status)) => BatteryReading::Present {
                percent: clamp_percent(status.percent as f64).trunc() as u8,
                plugged: status.plugged,
            },
            Ok(None) => BatteryReading::Absent,
            Err(e) => {
                debug!("Battery query failed: {}", e);
                BatteryReading::Unavailable
            }
        };

        let gpus = self.gpus.sample_utilization();

        let network = match self.source.interface_counters() {
            Ok(counters) => self.network.update(&counters, now),
            Err(e) => {
                debug!("Network counters query failed: {}", e);
                Default::default()
            }
        };

        MetricSample {
            timestamp: chrono::Utc::now().timestamp(),
            cpu_percent: clamp_percent(cpu as f64),
            ram_percent: clamp_percent(ram as f64),
            disk_percent: clamp_percent(disk as f64),
            battery,
            gpus,
            network_percent: network.percent,
            network_interface: network.interface,
            network_bytes_per_sec: network.bytes_per_sec,
        }
    }
}

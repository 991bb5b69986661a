//! Host telemetry backed by sysinfo and the battery crate.

use std::path::PathBuf;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::core::telemetry::{BatteryStatus, InterfaceCounters, TelemetrySource};
use crate::error::{MonitorError, Result};

/// [`TelemetrySource`] reading the local machine
pub struct HostTelemetry {
    system: System,
    disks: Disks,
    networks: Networks,
    battery_manager: Option<battery::Manager>,
    disk_mount: PathBuf,
}

impl HostTelemetry {
    pub fn new<P: Into<PathBuf>>(disk_mount: P) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        let system = System::new_with_specifics(refresh_kind);
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();

        // Battery support is optional; a missing manager just means
        // every battery read reports unavailable
        let battery_manager = match battery::Manager::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("Battery manager unavailable: {}", e);
                None
            }
        };

        Self {
            system,
            disks,
            networks,
            battery_manager,
            disk_mount: disk_mount.into(),
        }
    }
}

impl TelemetrySource for HostTelemetry {
    fn refresh(&mut self) {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);
    }

    fn cpu_percent(&mut self) -> Result<f32> {
        if self.system.cpus().is_empty() {
            return Err(MonitorError::metric_collection("No CPU reported"));
        }
        Ok(self.system.global_cpu_usage())
    }

    fn ram_percent(&mut self) -> Result<f32> {
        let total = self.system.total_memory();
        if total == 0 {
            return Err(MonitorError::metric_collection("Total memory reported as 0"));
        }
        Ok((self.system.used_memory() as f64 / total as f64 * 100.0) as f32)
    }

    fn disk_percent(&mut self) -> Result<f32> {
        let disk = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == self.disk_mount.as_path())
            .or_else(|| self.disks.iter().next())
            .ok_or_else(|| MonitorError::metric_collection("No disk mounted"))?;

        let total = disk.total_space();
        if total == 0 {
            return Err(MonitorError::metric_collection(format!(
                "Disk {} reports no capacity",
                disk.mount_point().display()
            )));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok((used as f64 / total as f64 * 100.0) as f32)
    }

    fn battery(&mut self) -> Result<Option<BatteryStatus>> {
        let manager = self
            .battery_manager
            .as_ref()
            .ok_or_else(|| MonitorError::metric_collection("Battery manager unavailable"))?;

        let mut batteries = manager
            .batteries()
            .map_err(|e| MonitorError::metric_collection(format!("Battery query failed: {}", e)))?;

        let Some(battery) = batteries.next() else {
            return Ok(None);
        };
        let battery = battery
            .map_err(|e| MonitorError::metric_collection(format!("Battery read failed: {}", e)))?;

        let percent = battery
            .state_of_charge()
            .get::<battery::units::ratio::percent>();

        // "Unknown" is what most drivers report for "plugged in, not
        // charging", so only an explicit discharge counts as on battery
        let plugged = !matches!(
            battery.state(),
            battery::State::Discharging | battery::State::Empty
        );

        Ok(Some(BatteryStatus { percent, plugged }))
    }

    fn interface_counters(&mut self) -> Result<Vec<InterfaceCounters>> {
        let mut counters: Vec<_> = self
            .networks
            .iter()
            .map(|(name, data)| {
                InterfaceCounters::new(
                    name.as_str(),
                    data.total_transmitted(),
                    data.total_received(),
                )
            })
            .collect();

        // sysinfo hands out a hash map; keep tie-breaking stable across ticks
        counters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(counters)
    }
}


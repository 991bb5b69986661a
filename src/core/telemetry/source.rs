use crate::error::Result;

use super::network::InterfaceCounters;

/// Battery as reported by the OS before any display mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub percent: f32,
    pub plugged: bool,
}

/// Raw OS counters the sampler reads once per tick.
///
/// Implementations may block briefly on OS calls. Every method is queried
/// independently, so one failing counter never hides the others.
pub trait TelemetrySource {
    /// Refresh cached OS state before the individual reads of a tick
    fn refresh(&mut self) {}

    fn cpu_percent(&mut self) -> Result<f32>;

    fn ram_percent(&mut self) -> Result<f32>;

    fn disk_percent(&mut self) -> Result<f32>;

    /// `Ok(None)` means the host has no battery at all
    fn battery(&mut self) -> Result<Option<BatteryStatus>>;

    fn interface_counters(&mut self) -> Result<Vec<InterfaceCounters>>;
}

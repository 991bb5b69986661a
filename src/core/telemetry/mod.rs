//! Per-tick telemetry sampling.
//!
//! OS access goes through [`TelemetrySource`]; the sampler turns raw
//! readings into a display-ready [`MetricSample`].

mod metrics;
pub mod network;
mod sampler;
mod source;

pub use metrics::{clamp_percent, display_percent, BatteryReading, GpuSample, MetricSample};
pub use network::{
    select_top_interface, throughput_percent, InterfaceCounters, NetworkMeter, NetworkRateState,
    NetworkReading, DEFAULT_CEILING_KBPS,
};
pub use sampler::TelemetrySampler;
pub use source::{BatteryStatus, TelemetrySource};

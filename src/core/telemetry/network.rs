//! Network throughput derived from cumulative interface counters.
//!
//! The overlay shows a single network bar fed by whichever interface has
//! moved the most bytes since boot. Throughput is the counter delta between
//! two consecutive ticks and only exists when both ticks picked the same
//! interface.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::metrics::clamp_percent;

/// Throughput treated as a full bar, in KB/s.
pub const DEFAULT_CEILING_KBPS: f64 = 102_400.0;

/// Lower bound for the time between two samples, in seconds.
pub const MIN_ELAPSED_SECS: f64 = 1.0;

/// Cumulative byte counters of one interface at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceCounters {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

impl InterfaceCounters {
    pub fn new<S: Into<String>>(name: S, bytes_sent: u64, bytes_recv: u64) -> Self {
        Self {
            name: name.into(),
            bytes_sent,
            bytes_recv,
        }
    }

    pub fn total(&self) -> u64 {
        self.bytes_sent.saturating_add(self.bytes_recv)
    }
}

/// Pick the interface with the largest sent+received total.
///
/// Only a strictly larger total replaces the current pick, so ties keep the
/// first interface listed and interfaces with no traffic are never chosen.
pub fn select_top_interface(counters: &[InterfaceCounters]) -> Option<&InterfaceCounters> {
    let mut top: Option<&InterfaceCounters> = None;
    let mut top_total = 0u64;

    for iface in counters {
        let total = iface.total();
        if total > top_total {
            top_total = total;
            top = Some(iface);
        }
    }

    top
}

/// Map bytes/s onto the display scale: `min(100, round(kbps / ceiling * 100))`.
pub fn throughput_percent(bytes_per_sec: f64, ceiling_kbps: f64) -> f32 {
    if ceiling_kbps <= 0.0 {
        return 0.0;
    }
    let kbps = bytes_per_sec / 1024.0;
    let percent = (kbps / ceiling_kbps * 100.0).round();
    clamp_percent(percent.min(100.0))
}

/// Counters remembered from the previous tick
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRateState {
    pub interface: String,
    pub last_sent: u64,
    pub last_recv: u64,
    pub last_sample_at: Instant,
}

impl NetworkRateState {
    pub fn capture(counters: &InterfaceCounters, at: Instant) -> Self {
        Self {
            interface: counters.name.clone(),
            last_sent: counters.bytes_sent,
            last_recv: counters.bytes_recv,
            last_sample_at: at,
        }
    }

    /// Bytes per second since this state was captured, or `None` when the
    /// counters belong to another interface.
    pub fn throughput(&self, current: &InterfaceCounters, now: Instant) -> Option<f64> {
        if self.interface != current.name {
            return None;
        }

        let elapsed = now
            .saturating_duration_since(self.last_sample_at)
            .as_secs_f64()
            .max(MIN_ELAPSED_SECS);

        // A counter that went backwards (driver reset, wrap) contributes nothing
        let sent = current.bytes_sent.saturating_sub(self.last_sent);
        let recv = current.bytes_recv.saturating_sub(self.last_recv);

        Some((sent as f64 + recv as f64) / elapsed)
    }
}

/// Result of one network measurement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkReading {
    pub interface: Option<String>,
    pub bytes_per_sec: Option<f64>,
    pub percent: f32,
}

/// Tracks the top interface across ticks and turns counter deltas into a
/// display percentage.
#[derive(Debug, Clone)]
pub struct NetworkMeter {
    ceiling_kbps: f64,
    state: Option<NetworkRateState>,
}

impl NetworkMeter {
    pub fn new(ceiling_kbps: f64) -> Self {
        Self {
            ceiling_kbps,
            state: None,
        }
    }

    pub fn ceiling_kbps(&self) -> f64 {
        self.ceiling_kbps
    }

    pub fn state(&self) -> Option<&NetworkRateState> {
        self.state.as_ref()
    }

    /// Feed this tick's counters.
    ///
    /// The stored state is replaced by the new top interface every time one
    /// is found; when nothing qualifies the previous state is kept as is.
    pub fn update(&mut self, counters: &[InterfaceCounters], now: Instant) -> NetworkReading {
        let Some(top) = select_top_interface(counters) else {
            return NetworkReading::default();
        };

        let bytes_per_sec = self
            .state
            .as_ref()
            .and_then(|previous| previous.throughput(top, now));

        let percent = bytes_per_sec
            .map(|rate| throughput_percent(rate, self.ceiling_kbps))
            .unwrap_or(0.0);

        self.state = Some(NetworkRateState::capture(top, now));

        NetworkReading {
            interface: Some(top.name.clone()),
            bytes_per_sec,
            percent,
        }
    }
}

impl Default for NetworkMeter {
    fn default() -> Self {
        Self::new(DEFAULT_CEILING_KBPS)
    }
}

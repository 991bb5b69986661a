//! Single-threaded tick source.
//!
//! Two fixed intervals share one thread: a fast clock tick and the slower
//! sample tick. The scheduler only does deadline arithmetic on the
//! `Instant`s it is given, so callers (and tests) decide what "now" is.

use std::time::{Duration, Instant};

pub const DEFAULT_CLOCK_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// Which ticks fired on a poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueTicks {
    pub clock: bool,
    pub sample: bool,
}

impl DueTicks {
    pub fn any(&self) -> bool {
        self.clock || self.sample
    }
}

#[derive(Debug, Clone)]
struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start,
        }
    }

    fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        // Missed periods collapse into this single firing
        let next = self.next_due + self.period;
        self.next_due = if next <= now { now + self.period } else { next };
        true
    }
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    clock: Ticker,
    sample: Ticker,
}

impl TickScheduler {
    /// Both ticks are due immediately at `start`
    pub fn new(clock_interval: Duration, sample_interval: Duration, start: Instant) -> Self {
        Self {
            clock: Ticker::new(clock_interval, start),
            sample: Ticker::new(sample_interval, start),
        }
    }

    pub fn clock_interval(&self) -> Duration {
        self.clock.period
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample.period
    }

    pub fn poll(&mut self, now: Instant) -> DueTicks {
        DueTicks {
            clock: self.clock.poll(now),
            sample: self.sample.poll(now),
        }
    }

    /// How long the caller may wait for input before the next tick is due
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.clock
            .next_due
            .min(self.sample.next_due)
            .saturating_duration_since(now)
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_INTERVAL, DEFAULT_SAMPLE_INTERVAL, Instant::now())
    }
}

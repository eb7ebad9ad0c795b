//! Time sources for record stamping
//!
//! Provides clock abstraction so records can be stamped from:
//! - System clock (when available)
//! - A fixed instant (for tests asserting exact timestamps)
//! - A stepped counter (reproducible sequences at a fixed sample rate)

use alloc::string::{String, ToString};

use chrono::DateTime;

use crate::constants::time::{DEFAULT_SAMPLE_INTERVAL_US, ISO_TIMESTAMP_FORMAT};

/// Timestamp in microseconds since the Unix epoch (UTC)
pub type Timestamp = u64;

/// Source of time for the simulator
pub trait TimeSource {
    /// Get current timestamp in microseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `us` microseconds
    pub fn advance(&mut self, us: u64) {
        self.timestamp += us;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Clock that moves forward by a fixed step on every read
///
/// The first read returns `start`. Useful for replaying a polling loop
/// without sleeping.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    next: core::cell::Cell<Timestamp>,
    step_us: u64,
}

impl SteppedClock {
    /// Clock starting at `start`, advancing `step_us` per read
    pub fn new(start: Timestamp, step_us: u64) -> Self {
        Self {
            next: core::cell::Cell::new(start),
            step_us,
        }
    }

    /// Stepped clock at the default one-second polling period
    pub fn per_second(start: Timestamp) -> Self {
        Self::new(start, DEFAULT_SAMPLE_INTERVAL_US)
    }
}

impl TimeSource for SteppedClock {
    fn now(&self) -> Timestamp {
        let current = self.next.get();
        self.next.set(current.saturating_add(self.step_us));
        current
    }
}

/// Render a timestamp in the record wire layout
///
/// Returns `None` only for instants chrono cannot represent (far beyond
/// year 262143), which no clock here produces.
pub fn format_timestamp(timestamp: Timestamp) -> Option<String> {
    let micros = i64::try_from(timestamp).ok()?;
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.format(ISO_TIMESTAMP_FORMAT).to_string())
}

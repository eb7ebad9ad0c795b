//! Time-Related Constants

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per second.
pub const US_PER_SECOND: u64 = 1_000_000;

// ===== TIMESTAMP LAYOUT =====

/// Wire layout of record timestamps (UTC, microsecond precision, no offset).
///
/// Matches what the dashboard already parses, e.g.
/// `2024-03-09T14:02:11.048213`.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Default polling period of the sensor-fusion loop (microseconds).
///
/// Used by `SteppedClock::per_second`.
pub const DEFAULT_SAMPLE_INTERVAL_US: u64 = US_PER_SECOND;

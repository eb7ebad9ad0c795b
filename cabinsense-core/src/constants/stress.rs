//! Stress Level Domain and Category Thresholds
//!
//! Stress is reported as a percentage with one decimal. The category
//! thresholds are global: they do not depend on the active scenario, so a
//! scenario's range and the categories it produces are correlated but not
//! tied together.

/// Stress levels at or above this value are `moderate` (%).
///
/// Values strictly below are `low`.
pub const STRESS_MODERATE_THRESHOLD_PCT: f64 = 40.0;

/// Stress levels at or above this value are `high` (%).
///
/// Matches the cabin decision model, which treats sustained stress above 70%
/// as the strongest discomfort signal.
pub const STRESS_HIGH_THRESHOLD_PCT: f64 = 70.0;

/// Highest representable stress level, in tenths of a percent (100.0%).
///
/// Catalog ranges are checked against it at compile time.
pub const STRESS_MAX_TENTHS: u16 = 1000;

//! Smoothing Parameters
//!
//! Consecutive readings are blended so a simulated wearable does not jump
//! across its whole range from one sample to the next:
//!
//! ```text
//! emitted = w * previous + (1 - w) * candidate
//! ```
//!
//! With `w = 0.7` a reading can move at most 30% of the scenario's range
//! width per sample (plus rounding), which is the continuity bound the
//! engine guarantees.

/// Weight given to the previously emitted value (0.0-1.0).
///
/// The same weight applies to heart rate and stress.
pub const DEFAULT_PREVIOUS_WEIGHT: f64 = 0.7;

/// Scale factor for one-decimal stress values.
pub const STRESS_DECIMAL_SCALE: f64 = 10.0;

/// Largest rounding error introduced when snapping stress to one decimal (%).
pub const STRESS_ROUNDING_SLACK_PCT: f64 = 0.05;

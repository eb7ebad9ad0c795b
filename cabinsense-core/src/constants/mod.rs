//! Constants for CabinSense Core
//!
//! Centralized, documented constants for the biometric simulator. Every value
//! that shapes emitted data (classification cut-offs, smoothing weight,
//! timestamp layout) lives here rather than inline.
//!
//! ## Organization
//!
//! - **Stress**: Category thresholds and the stress percentage domain
//! - **Smoothing**: Blend weight between the previous reading and a fresh draw
//! - **Time**: Unit conversions and timestamp formatting
//!
//! Scenario bounds are not here; they belong to the catalog in
//! [`crate::scenario`], next to the descriptions they travel with.

/// Stress percentage domain and category thresholds.
pub mod stress;

/// Smoothing weights for consecutive readings.
pub mod smoothing;

/// Time unit conversions and timestamp layout.
pub mod time;

pub use stress::{
    STRESS_MODERATE_THRESHOLD_PCT, STRESS_HIGH_THRESHOLD_PCT, STRESS_MAX_TENTHS,
};

pub use smoothing::{DEFAULT_PREVIOUS_WEIGHT, STRESS_DECIMAL_SCALE};

pub use time::{DEFAULT_SAMPLE_INTERVAL_US, ISO_TIMESTAMP_FORMAT};

//! Data records and stress classification
//!
//! A [`DataRecord`] is the unit handed across the system boundary: one
//! timestamped reading from the simulated wearable. It is a plain `Copy`
//! value with no link back to the engine that produced it.
//!
//! ## Wire Shape
//!
//! With the `serde` feature a record serializes to a mapping with exactly
//! these keys:
//!
//! ```text
//! {
//!   "timestamp":       "2024-03-09T14:02:11.048213",
//!   "heart_rate":      72,
//!   "stress_level":    24.6,
//!   "stress_category": "low",
//!   "scenario":        "normal",
//!   "description":     "Relaxed and comfortable state"
//! }
//! ```
//!
//! Publishers, dashboards and decision logic all consume this shape.

use alloc::string::String;
use core::fmt;

use crate::constants::stress::{STRESS_HIGH_THRESHOLD_PCT, STRESS_MODERATE_THRESHOLD_PCT};
use crate::scenario::Scenario;
use crate::time::{format_timestamp, Timestamp};

/// Coarse stress classification
///
/// Derived from the stress level alone through fixed global thresholds,
/// independent of the scenario that produced the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StressCategory {
    /// Below 40%
    Low,
    /// 40% up to (not including) 70%
    Moderate,
    /// 70% and above
    High,
}

impl StressCategory {
    /// Classify a stress level (%)
    pub fn from_stress_level(stress_level: f64) -> Self {
        if stress_level < STRESS_MODERATE_THRESHOLD_PCT {
            StressCategory::Low
        } else if stress_level < STRESS_HIGH_THRESHOLD_PCT {
            StressCategory::Moderate
        } else {
            StressCategory::High
        }
    }

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            StressCategory::Low => "low",
            StressCategory::Moderate => "moderate",
            StressCategory::High => "high",
        }
    }
}

impl fmt::Display for StressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StressCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One simulated wearable reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRecord {
    /// Emission instant, microseconds since the Unix epoch (UTC)
    pub timestamp: Timestamp,
    /// Heart rate in bpm, within the scenario's heart-rate range
    pub heart_rate: u16,
    /// Stress level in percent, one decimal, within the scenario's range
    pub stress_level: f64,
    /// Classification of `stress_level`
    pub stress_category: StressCategory,
    /// Scenario active when the record was emitted
    pub scenario: Scenario,
    /// Scenario description, copied verbatim
    pub description: &'static str,
}

impl DataRecord {
    /// Timestamp in the wire layout
    pub fn timestamp_iso(&self) -> Option<String> {
        format_timestamp(self.timestamp)
    }

    /// Same reading with the timestamp dropped
    ///
    /// Two engines fed the same seed and calls produce equal readings even
    /// though their timestamps differ.
    pub fn reading(&self) -> (u16, f64, StressCategory, Scenario) {
        (self.heart_rate, self.stress_level, self.stress_category, self.scenario)
    }
}

impl fmt::Display for DataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HR: {:3} bpm | Stress: {:5.1}% ({:8}) | Scenario: {}",
            self.heart_rate,
            self.stress_level,
            self.stress_category.name(),
            self.scenario
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{Error, SerializeStruct};

        let timestamp = self
            .timestamp_iso()
            .ok_or_else(|| S::Error::custom("timestamp out of representable range"))?;

        let mut state = serializer.serialize_struct("DataRecord", 6)?;
        state.serialize_field("timestamp", timestamp.as_str())?;
        state.serialize_field("heart_rate", &self.heart_rate)?;
        state.serialize_field("stress_level", &self.stress_level)?;
        state.serialize_field("stress_category", &self.stress_category)?;
        state.serialize_field("scenario", &self.scenario)?;
        state.serialize_field("description", self.description)?;
        state.end()
    }
}

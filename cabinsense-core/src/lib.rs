//! Biometric simulator core for CabinSense
//!
//! Stands in for the occupant's wearable while the cabin-comfort system is
//! developed without hardware. Produces heart-rate and stress readings that
//! follow a named physiological scenario, move smoothly between samples, and
//! arrive as timestamped records in the shape the rest of the system
//! consumes.
//!
//! Key constraints:
//! - No I/O, never blocks
//! - Reproducible sequences from a per-engine seed
//! - Works without std (alloc only) for on-device test rigs
//!
//! ```no_run
//! use cabinsense_core::SimulatorEngine;
//!
//! let mut engine = SimulatorEngine::new();
//!
//! // Triggered stress event from the dashboard
//! engine.set_scenario("moderate").expect("known scenario");
//!
//! for _ in 0..5 {
//!     let record = engine.get_data();
//!     println!("{} @ {:?}", record, record.timestamp_iso());
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod record;
pub mod scenario;
pub mod time;

#[cfg(feature = "std")]
pub mod shared;

// Public API
pub use engine::{ContinuityBound, LastEmitted, SimulatorConfig, SimulatorEngine};
pub use errors::{SimulatorError, SimulatorResult};
pub use record::{DataRecord, StressCategory};
pub use scenario::{HeartRateRange, Scenario, ScenarioCatalog, ScenarioProfile, StressRange};
pub use time::{FixedClock, SteppedClock, TimeSource, Timestamp};

#[cfg(feature = "std")]
pub use shared::SharedSimulator;
#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

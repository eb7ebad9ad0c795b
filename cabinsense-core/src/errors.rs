//! Error Types for the Biometric Simulator
//!
//! ## Design Philosophy
//!
//! The simulator has exactly one way to fail: a caller asks for a scenario
//! that is not in the catalog. Everything else (drawing, blending, clamping,
//! classification) is total arithmetic over validated bounds.
//!
//! 1. **Fail Loudly**: An unknown identifier is surfaced immediately. The
//!    engine never falls back to a default scenario, since that would hide a
//!    wiring bug in the surrounding system (a dashboard sending `"drowsy"`
//!    would silently look like `"normal"`).
//!
//! 2. **No Heap Allocation**: The rejected identifier is kept in a fixed
//!    capacity `heapless::String`, truncated if needed, so errors can be
//!    produced on devices without an allocator.
//!
//! 3. **State Untouched**: Returning an error guarantees the active scenario
//!    and smoothing memory are exactly as they were before the call.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use cabinsense_core::{SimulatorEngine, SimulatorError};
//!
//! let mut engine = SimulatorEngine::with_seed(7);
//!
//! match engine.set_scenario("panic") {
//!     Ok(()) => {}
//!     Err(SimulatorError::UnknownScenario { requested }) => {
//!         // Reject the command upstream, keep generating for the old scenario
//!         assert_eq!(requested.as_str(), "panic");
//!     }
//! }
//! ```

use heapless::String;
use thiserror_no_std::Error;

/// Maximum number of bytes of a rejected identifier kept for diagnostics
pub const MAX_REPORTED_ID_LEN: usize = 32;

/// Result type for simulator operations
pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Simulator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    /// Identifier is not one of the catalog scenarios
    #[error("Unknown scenario '{requested}' (expected one of: normal, moderate, bad)")]
    UnknownScenario {
        /// The identifier as received, truncated to `MAX_REPORTED_ID_LEN` bytes
        requested: String<MAX_REPORTED_ID_LEN>,
    },
}

impl SimulatorError {
    /// Build an `UnknownScenario` error from an arbitrary identifier
    pub fn unknown_scenario(requested: &str) -> Self {
        let mut kept = String::new();
        for ch in requested.chars() {
            if kept.push(ch).is_err() {
                break;
            }
        }
        Self::UnknownScenario { requested: kept }
    }
}

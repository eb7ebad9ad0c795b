//! Record Contracts for Simulated Biometric Data
//!
//! ## Overview
//!
//! The simulator emits records as flat JSON objects. This crate pins down that
//! wire shape as a versioned contract, so the dashboard, the decision loop and
//! any recorded test fixtures agree on which keys exist and what they hold.
//!
//! A contract is itself a JSON document:
//!
//! ```json
//! {
//!   "namespace": "io.cabinsense.biometrics",
//!   "name": "biometric_record",
//!   "version": "v1",
//!   "fields": [
//!     {"name": "timestamp", "type": "timestamp", "fraction_digits": 6},
//!     {"name": "heart_rate", "type": "integer"},
//!     {"name": "stress_level", "type": "decimal", "places": 1}
//!   ]
//! }
//! ```
//!
//! ## Versioning
//!
//! Contracts carry their version in the registry key (`biometric_record_v1`).
//! New keys go into a new version; the registry tracks which version is the
//! latest for each name.
//!
//! ## Validation
//!
//! [`RecordValidator`] checks an incoming record against a contract and, unless
//! told otherwise, against the scenario catalog: a heart rate outside the
//! named scenario's range or a category that disagrees with the stress level
//! is reported even when the JSON shape is fine.
//!
//! ```rust
//! use cabinsense_core::SimulatorEngine;
//! use cabinsense_schemas::{RecordValidator, GLOBAL_REGISTRY};
//!
//! let contract = GLOBAL_REGISTRY.get_latest("biometric_record")?;
//! let validator = RecordValidator::new(contract);
//!
//! let mut engine = SimulatorEngine::with_seed(7);
//! let record = engine.get_data();
//! let report = validator.validate(&serde_json::to_value(record)?);
//! assert!(report.is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod registry;
pub mod schemas;
pub mod validation;

pub use registry::{ContractMetadata, SchemaRegistry, GLOBAL_REGISTRY};
pub use schemas::{FieldKind, FieldSpec, RecordContract};
pub use validation::{IssueType, RecordValidator, Severity, ValidationIssue, ValidationReport};

/// Contract-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Contract not found: {0}")]
    NotFound(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Invalid contract: {0}")]
    InvalidContract(String),
}

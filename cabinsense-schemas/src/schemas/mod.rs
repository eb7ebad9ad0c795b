//! CabinSense record contracts
//!
//! Each contract lists the fields a consumer will find in a record and the
//! kind of value each one holds. Contracts are written as JSON documents so
//! the same definition can be shipped to the dashboard unchanged.

use serde::{Deserialize, Serialize};
use serde_json::json;

use cabinsense_core::{Scenario, StressCategory};

use crate::SchemaError;

/// Kind of value a field carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// ISO-8601 date-time string with a fixed number of fractional digits
    Timestamp {
        /// Digits after the seconds separator
        fraction_digits: u8,
    },
    /// Whole number
    Integer,
    /// Number with at most `places` decimals
    Decimal {
        places: u8,
    },
    /// One of a closed set of strings
    Enum {
        symbols: Vec<String>,
    },
    /// Free text
    String,
}

/// One field of a record contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub doc: String,
}

/// Versioned description of a record's wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContract {
    pub namespace: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub doc: String,
    pub fields: Vec<FieldSpec>,
}

impl RecordContract {
    /// Parse a contract from its JSON document
    pub fn from_json(document: serde_json::Value) -> Result<Self, SchemaError> {
        let contract: RecordContract = serde_json::from_value(document)
            .map_err(|e| SchemaError::InvalidContract(e.to_string()))?;
        contract.check()?;
        Ok(contract)
    }

    /// Registry key, e.g. `biometric_record_v1`
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    fn check(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::InvalidContract(format!("{} has no fields", self.name)));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::InvalidContract(format!(
                    "{} declares field '{}' twice",
                    self.name, field.name
                )));
            }
            if let FieldKind::Enum { symbols } = &field.kind {
                if symbols.is_empty() {
                    return Err(SchemaError::InvalidContract(format!(
                        "enum field '{}' has no symbols",
                        field.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Biometric record contract v1
///
/// The shape every simulated wearable reading takes on the wire.
pub fn biometric_record_v1() -> Result<RecordContract, SchemaError> {
    let scenarios: Vec<&str> = Scenario::ALL.iter().map(|s| s.name()).collect();
    let categories: Vec<&str> = [StressCategory::Low, StressCategory::Moderate, StressCategory::High]
        .iter()
        .map(|c| c.name())
        .collect();

    RecordContract::from_json(json!({
        "namespace": "io.cabinsense.biometrics",
        "name": "biometric_record",
        "version": "v1",
        "doc": "Simulated wearable reading for one polling tick",
        "fields": [
            {
                "name": "timestamp",
                "type": "timestamp",
                "fraction_digits": 6,
                "doc": "Emission instant, UTC, microsecond precision"
            },
            {
                "name": "heart_rate",
                "type": "integer",
                "doc": "Heart rate in beats per minute"
            },
            {
                "name": "stress_level",
                "type": "decimal",
                "places": 1,
                "doc": "Stress level in percent"
            },
            {
                "name": "stress_category",
                "type": "enum",
                "symbols": categories,
                "doc": "Coarse stress class from global thresholds"
            },
            {
                "name": "scenario",
                "type": "enum",
                "symbols": scenarios,
                "doc": "Scenario active at emission"
            },
            {
                "name": "description",
                "type": "string",
                "doc": "Scenario description"
            }
        ]
    }))
}

//! Contract-Based Validation
//!
//! Checks a JSON record against a [`RecordContract`] and, optionally,
//! against the scenario catalog the simulator draws from. Consumers run this
//! on whatever arrives from the bus before trusting a reading.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use cabinsense_core::{Scenario, StressCategory};

use crate::schemas::{FieldKind, FieldSpec, RecordContract};

/// Validator for one record contract
pub struct RecordValidator {
    contract: RecordContract,

    /// Whether to check values against the scenario catalog
    check_catalog: bool,
}

impl RecordValidator {
    /// Validator checking both shape and catalog bounds
    pub fn new(contract: RecordContract) -> Self {
        Self {
            contract,
            check_catalog: true,
        }
    }

    /// Only check the wire shape, not scenario bounds
    pub fn shape_only(mut self) -> Self {
        self.check_catalog = false;
        self
    }

    /// Contract records are checked against
    pub fn contract(&self) -> &RecordContract {
        &self.contract
    }

    /// Validate a record
    pub fn validate(&self, value: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(record) = value.as_object() else {
            report.add(ValidationIssue::error(
                IssueType::TypeMismatch,
                None,
                "Expected a JSON object".to_string(),
            ));
            return report;
        };

        self.validate_structure(record, &mut report);

        if self.check_catalog {
            self.validate_against_catalog(record, &mut report);
        }

        report
    }

    fn validate_structure(&self, record: &Map<String, Value>, report: &mut ValidationReport) {
        for field in &self.contract.fields {
            match record.get(&field.name) {
                Some(value) => check_field(field, value, report),
                None => report.add(ValidationIssue::error(
                    IssueType::MissingField,
                    Some(&field.name),
                    format!("Required field '{}' is missing", field.name),
                )),
            }
        }

        for key in record.keys() {
            if self.contract.field(key).is_none() {
                report.add(ValidationIssue::error(
                    IssueType::UnexpectedField,
                    Some(key),
                    format!("Field '{}' is not part of {}", key, self.contract.qualified_name()),
                ));
            }
        }
    }

    fn validate_against_catalog(&self, record: &Map<String, Value>, report: &mut ValidationReport) {
        let stress = record.get("stress_level").and_then(Value::as_f64);

        if let (Some(stress), Some(category)) =
            (stress, record.get("stress_category").and_then(Value::as_str))
        {
            let expected = StressCategory::from_stress_level(stress);
            if category != expected.name() {
                report.add(ValidationIssue::error(
                    IssueType::InconsistentCategory,
                    Some("stress_category"),
                    format!(
                        "Stress {} classifies as '{}', record says '{}'",
                        stress, expected, category
                    ),
                ));
            }
        }

        let Some(id) = record.get("scenario").and_then(Value::as_str) else {
            return;
        };
        // Unknown identifiers are already reported by the enum check
        let Ok(scenario) = id.parse::<Scenario>() else {
            return;
        };
        let profile = scenario.profile();

        // Any integer, including negatives and values past i64, reaches the bounds check
        let heart_rate = record.get("heart_rate").and_then(|v| {
            v.as_i64()
                .map(i128::from)
                .or_else(|| v.as_u64().map(i128::from))
        });
        if let Some(heart_rate) = heart_rate {
            let in_range = u16::try_from(heart_rate).map_or(false, |bpm| profile.heart_rate.contains(bpm));
            if !in_range {
                report.add(ValidationIssue::error(
                    IssueType::BoundsViolation,
                    Some("heart_rate"),
                    format!(
                        "Heart rate {} outside [{}, {}] for {}",
                        heart_rate, profile.heart_rate.min_bpm, profile.heart_rate.max_bpm, scenario
                    ),
                ));
            }
        }

        if let Some(stress) = stress {
            if !profile.stress.contains(stress) {
                report.add(ValidationIssue::error(
                    IssueType::BoundsViolation,
                    Some("stress_level"),
                    format!(
                        "Stress {} outside [{}, {}] for {}",
                        stress, profile.stress.min(), profile.stress.max(), scenario
                    ),
                ));
            }
        }

        if let Some(description) = record.get("description").and_then(Value::as_str) {
            if description != profile.description {
                report.add(ValidationIssue::warning(
                    IssueType::DescriptionMismatch,
                    Some("description"),
                    format!("Description differs from catalog text for {}", scenario),
                ));
            }
        }
    }
}

fn check_field(field: &FieldSpec, value: &Value, report: &mut ValidationReport) {
    let name = field.name.as_str();
    match &field.kind {
        FieldKind::Timestamp { fraction_digits } => match value.as_str() {
            Some(text) => {
                if !timestamp_matches(text, *fraction_digits) {
                    report.add(ValidationIssue::error(
                        IssueType::MalformedValue,
                        Some(name),
                        format!(
                            "'{}' is not an ISO-8601 timestamp with {} fractional digits",
                            text, fraction_digits
                        ),
                    ));
                }
            }
            None => report.add(type_mismatch(name, "timestamp string", value)),
        },
        FieldKind::Integer => {
            if !(value.is_u64() || value.is_i64()) {
                report.add(type_mismatch(name, "integer", value));
            }
        }
        FieldKind::Decimal { places } => match value.as_f64() {
            Some(number) => {
                if !has_at_most_places(number, *places) {
                    report.add(ValidationIssue::error(
                        IssueType::MalformedValue,
                        Some(name),
                        format!("{} has more than {} decimal place(s)", number, places),
                    ));
                }
            }
            None => report.add(type_mismatch(name, "number", value)),
        },
        FieldKind::Enum { symbols } => match value.as_str() {
            Some(text) => {
                if !symbols.iter().any(|s| s == text) {
                    report.add(ValidationIssue::error(
                        IssueType::UnknownSymbol,
                        Some(name),
                        format!("'{}' is not one of {:?}", text, symbols),
                    ));
                }
            }
            None => report.add(type_mismatch(name, "string", value)),
        },
        FieldKind::String => {
            if !value.is_string() {
                report.add(type_mismatch(name, "string", value));
            }
        }
    }
}

fn type_mismatch(field: &str, expected: &str, value: &Value) -> ValidationIssue {
    ValidationIssue::error(
        IssueType::TypeMismatch,
        Some(field),
        format!("Expected {} for '{}', found {}", expected, field, value),
    )
}

fn timestamp_matches(text: &str, fraction_digits: u8) -> bool {
    let Some((_, fraction)) = text.rsplit_once('.') else {
        return fraction_digits == 0
            && NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok();
    };
    fraction.len() == usize::from(fraction_digits)
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn has_at_most_places(number: f64, places: u8) -> bool {
    let scale = 10f64.powi(i32::from(places));
    let scaled = number * scale;
    (scaled - scaled.round()).abs() < 1e-6
}

/// Validation report
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Errors that make the record unusable
    pub errors: Vec<ValidationIssue>,

    /// Suspicious but usable
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// File an issue by its severity
    pub fn add(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Whether any issue of this type was filed
    pub fn has(&self, issue_type: IssueType) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|issue| issue.issue_type == issue_type)
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Individual validation issue
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(issue_type: IssueType, field: Option<&str>, message: String) -> Self {
        Self {
            issue_type,
            field: field.map(str::to_string),
            message,
            severity: Severity::Error,
        }
    }

    fn warning(issue_type: IssueType, field: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(issue_type, field, message)
        }
    }
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Required field is missing
    MissingField,

    /// Field not declared by the contract
    UnexpectedField,

    /// Type doesn't match contract
    TypeMismatch,

    /// Right type, wrong form (timestamp layout, too many decimals)
    MalformedValue,

    /// String not in the declared symbol set
    UnknownSymbol,

    /// Value outside the scenario's declared range
    BoundsViolation,

    /// Category disagrees with the stress level
    InconsistentCategory,

    /// Description differs from the catalog text
    DescriptionMismatch,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas;
    use serde_json::json;

    fn validator() -> RecordValidator {
        RecordValidator::new(schemas::biometric_record_v1().unwrap())
    }

    fn good_record() -> Value {
        json!({
            "timestamp": "2024-03-09T14:02:11.048213",
            "heart_rate": 72,
            "stress_level": 24.6,
            "stress_category": "low",
            "scenario": "normal",
            "description": "Relaxed and comfortable state"
        })
    }

    #[test]
    fn accepts_well_formed_record() {
        let report = validator().validate(&good_record());
        assert!(report.is_valid(), "{:?}", report);
        assert_eq!(report.total_issues(), 0);
    }

    #[test]
    fn detects_missing_and_extra_fields() {
        let mut record = good_record();
        let object = record.as_object_mut().unwrap();
        object.remove("heart_rate");
        object.insert("fatigue_index".to_string(), json!(12));

        let report = validator().validate(&record);
        assert!(report.has(IssueType::MissingField));
        assert!(report.has(IssueType::UnexpectedField));
    }

    #[test]
    fn rejects_non_object() {
        let report = validator().validate(&json!([1, 2, 3]));
        assert!(report.has(IssueType::TypeMismatch));
    }

    #[test]
    fn detects_type_mismatches() {
        let mut record = good_record();
        record["heart_rate"] = json!("72");
        record["stress_level"] = json!(null);

        let report = validator().validate(&record);
        assert_eq!(
            report.errors.iter().filter(|e| e.issue_type == IssueType::TypeMismatch).count(),
            2
        );
    }

    #[test]
    fn heart_rate_must_be_whole() {
        let mut record = good_record();
        record["heart_rate"] = json!(72.5);
        assert!(validator().validate(&record).has(IssueType::TypeMismatch));
    }

    #[test]
    fn detects_malformed_timestamp_and_precision() {
        let mut record = good_record();
        record["timestamp"] = json!("2024-03-09 14:02:11");
        record["stress_level"] = json!(24.65);

        let report = validator().validate(&record);
        let malformed: Vec<_> = report
            .errors
            .iter()
            .filter(|e| e.issue_type == IssueType::MalformedValue)
            .filter_map(|e| e.field.as_deref())
            .collect();
        assert_eq!(malformed, ["timestamp", "stress_level"]);
    }

    #[test]
    fn millisecond_timestamp_is_not_enough() {
        let mut record = good_record();
        record["timestamp"] = json!("2024-03-09T14:02:11.048");
        assert!(validator().validate(&record).has(IssueType::MalformedValue));
    }

    #[test]
    fn detects_unknown_symbols() {
        let mut record = good_record();
        record["scenario"] = json!("drowsy");
        record["stress_category"] = json!("extreme");

        let report = validator().validate(&record);
        assert_eq!(
            report.errors.iter().filter(|e| e.issue_type == IssueType::UnknownSymbol).count(),
            2
        );
    }

    #[test]
    fn detects_inconsistent_category() {
        let mut record = good_record();
        record["stress_level"] = json!(40.0);
        record["stress_category"] = json!("low");
        record["scenario"] = json!("moderate");
        record["heart_rate"] = json!(90);
        record["description"] = json!("Moderate stress, slightly uncomfortable");

        let report = validator().validate(&record);
        assert!(report.has(IssueType::InconsistentCategory));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn detects_values_outside_scenario() {
        let mut record = good_record();
        record["heart_rate"] = json!(120);

        let report = validator().validate(&record);
        let bounds = report
            .errors
            .iter()
            .find(|e| e.issue_type == IssueType::BoundsViolation)
            .unwrap();
        assert_eq!(bounds.field.as_deref(), Some("heart_rate"));

        // Shape-only validation does not know about scenarios
        assert!(validator().shape_only().validate(&record).is_valid());
    }

    #[test]
    fn detects_negative_heart_rate() {
        let mut record = good_record();
        record["heart_rate"] = json!(-5);

        let report = validator().validate(&record);
        assert!(!report.is_valid());
        let bounds = report
            .errors
            .iter()
            .find(|e| e.issue_type == IssueType::BoundsViolation)
            .unwrap();
        assert_eq!(bounds.field.as_deref(), Some("heart_rate"));
    }

    #[test]
    fn detects_heart_rate_beyond_u16() {
        let mut record = good_record();
        record["heart_rate"] = json!(70_000);
        assert!(validator().validate(&record).has(IssueType::BoundsViolation));

        record["heart_rate"] = json!(u64::MAX);
        assert!(validator().validate(&record).has(IssueType::BoundsViolation));
    }

    #[test]
    fn description_mismatch_is_a_warning() {
        let mut record = good_record();
        record["description"] = json!("Calm");

        let report = validator().validate(&record);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].severity, Severity::Warning);
    }
}

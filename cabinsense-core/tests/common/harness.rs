//! Lightweight named-case runner
//!
//! Collects pass/fail per case instead of stopping at the first failure, so
//! a sweep over every scenario reports all offenders at once.

use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub error_message: Option<String>,
}

#[derive(Default)]
pub struct TestHarness {
    results: Vec<CaseResult>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single case
    pub fn run_case<F>(&mut self, name: impl Into<String>, case: F)
    where
        F: FnOnce() -> Result<(), String>,
    {
        let result = case();
        self.results.push(CaseResult {
            name: name.into(),
            passed: result.is_ok(),
            error_message: result.err(),
        });
    }

    /// Run one case per parameter
    pub fn run_parameterized<T, F>(&mut self, name: &str, params: &[T], case: F)
    where
        T: Debug,
        F: Fn(&T) -> Result<(), String>,
    {
        for param in params {
            self.run_case(format!("{}[{:?}]", name, param), || case(param));
        }
    }

    pub fn failures(&self) -> Vec<&CaseResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    pub fn case_count(&self) -> usize {
        self.results.len()
    }

    /// Panic with every failed case listed
    pub fn assert_all_passed(&self) {
        let failures = self.failures();
        if !failures.is_empty() {
            let report: Vec<String> = failures
                .iter()
                .map(|r| format!("  ✗ {}: {}", r.name, r.error_message.as_deref().unwrap_or("")))
                .collect();
            panic!("{} of {} cases failed:\n{}", failures.len(), self.results.len(), report.join("\n"));
        }
    }
}

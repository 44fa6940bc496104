use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome of validating an action's input.
///
/// Valid when no field carries a failure. Failures are grouped per field and
/// keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    failures: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn add_failure(&mut self, field: &str, message: impl Into<String>) {
        self.failures
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn failures(&self) -> &BTreeMap<String, Vec<String>> {
        &self.failures
    }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.failures.get(field).map(Vec::as_slice)
    }

    /// First failing field, used when a single field has to be reported.
    pub fn first_field(&self) -> Option<&str> {
        self.failures.keys().next().map(String::as_str)
    }
}

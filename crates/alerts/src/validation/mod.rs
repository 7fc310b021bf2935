//! Alert validation against the metrics an insight offers.
//!
//! Returns a [`ValidationResult`] with errors (the alert cannot be saved or
//! evaluated) and warnings (advisory, e.g. a value not entered yet).

mod condition_checks;
pub(crate) mod fuzzy;

use serde::{Deserialize, Serialize};

use automation_core::AlertAutomation;

use crate::metrics::AlertMetric;

// ── Result types ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location in the automation, e.g. `"alert.condition.measure.right"`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion,
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Error at `path`, if any.
    pub fn error_at(&self, path: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.path == path)
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate the alert of `automation` against `supported_metrics`.
pub fn validate_alert<A: AlertAutomation>(
    automation: &A,
    supported_metrics: &[AlertMetric],
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(alert) = automation.alert() else {
        result.error("alert", "automation has no alert");
        return result;
    };

    let metric = condition_checks::validate_metric(alert, supported_metrics, &mut result);
    condition_checks::validate_comparator(alert, metric, &mut result);
    condition_checks::validate_execution(alert, &mut result);
    condition_checks::validate_value(alert, &mut result);
    result
}

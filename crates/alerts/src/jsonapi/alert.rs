//! Alert payload embedded in an automation's attributes.
//!
//! Automations carry the alert as raw JSON; it is parsed into these types
//! during conversion. An unknown filter kind, trigger mode or operator
//! therefore drops that one alert instead of failing the whole document.
//! Operators stay strings so the error names the offending operator.

use serde::{Deserialize, Serialize};

use automation_core::TriggerMode;

use super::afm::{AfmFilter, AfmLocalIdentifier, AfmMeasureItem};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiAlert {
    #[serde(default)]
    pub condition: JsonApiAlertCondition,
    #[serde(default)]
    pub execution: JsonApiAlertExecution,
    #[serde(default)]
    pub trigger: Option<TriggerMode>,
}

/// Wrapper carrying exactly one of the condition shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonApiAlertCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<JsonApiComparisonCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<JsonApiRelativeCondition>,
    /// Range conditions are recognised but not supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiComparisonCondition {
    pub operator: String,
    pub left: AfmLocalIdentifier,
    pub right: JsonApiOperand,
}

/// Right-hand operand: a literal value or another measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonApiOperand {
    Value {
        value: f64,
    },
    LocalIdentifier {
        #[serde(rename = "localIdentifier")]
        local_identifier: String,
    },
}

impl JsonApiOperand {
    pub fn value(&self) -> Option<f64> {
        match self {
            JsonApiOperand::Value { value } => Some(*value),
            JsonApiOperand::LocalIdentifier { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiRelativeCondition {
    pub operator: String,
    pub measure: JsonApiArithmeticMeasure,
    pub threshold: JsonApiValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiArithmeticMeasure {
    pub operator: String,
    pub left: AfmLocalIdentifier,
    pub right: AfmLocalIdentifier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiValue {
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonApiAlertExecution {
    #[serde(default)]
    pub measures: Vec<AfmMeasureItem>,
    #[serde(default)]
    pub filters: Vec<AfmFilter>,
    #[serde(default)]
    pub attributes: Vec<serde_json::Value>,
}

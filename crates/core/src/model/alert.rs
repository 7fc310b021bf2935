//! Typed alert conditions attached to an automation.

use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::insight::Attribute;
use super::measure::Measure;
use super::operators::{ArithmeticOperator, ComparisonOperator, RelativeOperator};

/// Lifecycle state of an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutomationState {
    #[default]
    Active,
    Paused,
}

/// How often a triggered alert notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerMode {
    Always,
    Once,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertTrigger {
    pub state: AutomationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TriggerMode>,
}

/// The execution an alert is evaluated against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertExecution {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub measures: Vec<Measure>,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// `left <operator> right`, where `left` is a measure local identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCondition {
    pub operator: ComparisonOperator,
    pub left: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

/// The two measures a relative condition compares and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeMeasure {
    pub operator: ArithmeticOperator,
    pub left: String,
    /// Comparator measure local identifier; empty while unresolved.
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeCondition {
    pub operator: RelativeOperator,
    pub measure: RelativeMeasure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AlertCondition {
    Comparison(ComparisonCondition),
    Relative(RelativeCondition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationAlert {
    pub condition: AlertCondition,
    pub execution: AlertExecution,
    pub trigger: AlertTrigger,
}

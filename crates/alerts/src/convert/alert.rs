//! Alert payload to typed [`AutomationAlert`].

use serde::Deserialize;
use tracing::debug;

use automation_core::{
    AlertCondition, AlertExecution, AlertTrigger, AutomationAlert, AutomationError,
    AutomationState, ComparisonCondition, RelativeCondition, RelativeMeasure, Result,
};

use crate::jsonapi::{JsonApiAlert, JsonApiComparisonCondition, JsonApiRelativeCondition};

use super::filter::convert_filter;
use super::measure::convert_measure;

/// Convert a raw alert payload, or `None` when there is nothing representable.
///
/// `None` covers: no payload, the unsupported `range` shape, a payload with
/// no condition, a payload that does not match the alert schema (unknown
/// filter kinds, trigger modes or automation states included), and payloads
/// whose operators, measures or filters cannot be converted.
pub fn convert_alert(
    alert: Option<&serde_json::Value>,
    state: Option<&str>,
) -> Option<AutomationAlert> {
    let alert = alert?;
    match parse_alert(alert, state) {
        Ok(converted) => Some(converted),
        Err(e) => {
            debug!(error = %e, "alert not converted");
            None
        }
    }
}

fn parse_alert(alert: &serde_json::Value, state: Option<&str>) -> Result<AutomationAlert> {
    let state = state.map(parse_state).transpose()?;
    let alert = JsonApiAlert::deserialize(alert)?;
    try_convert_alert(&alert, state)
}

fn parse_state(state: &str) -> Result<AutomationState> {
    match state {
        "ACTIVE" => Ok(AutomationState::Active),
        "PAUSED" => Ok(AutomationState::Paused),
        other => Err(AutomationError::Validation(format!(
            "unknown automation state: '{}'",
            other
        ))),
    }
}

/// Convert an alert payload, reporting why it could not be represented.
pub fn try_convert_alert(
    alert: &JsonApiAlert,
    state: Option<AutomationState>,
) -> Result<AutomationAlert> {
    let condition = &alert.condition;
    if condition.range.is_some() {
        return Err(AutomationError::UnsupportedConditionShape("range".to_string()));
    }

    let condition = if let Some(comparison) = &condition.comparison {
        AlertCondition::Comparison(convert_comparison(comparison)?)
    } else if let Some(relative) = &condition.relative {
        AlertCondition::Relative(convert_relative(relative)?)
    } else {
        return Err(AutomationError::MissingCondition);
    };

    let execution = AlertExecution {
        // Attribute-scoped alerts are not supported by the backend yet.
        attributes: Vec::new(),
        measures: alert
            .execution
            .measures
            .iter()
            .map(convert_measure)
            .collect::<Result<_>>()?,
        filters: alert
            .execution
            .filters
            .iter()
            .map(convert_filter)
            .collect::<Result<_>>()?,
    };

    Ok(AutomationAlert {
        condition,
        execution,
        trigger: AlertTrigger {
            state: state.unwrap_or(AutomationState::Active),
            mode: alert.trigger,
        },
    })
}

fn convert_comparison(comparison: &JsonApiComparisonCondition) -> Result<ComparisonCondition> {
    Ok(ComparisonCondition {
        operator: comparison.operator.parse()?,
        left: comparison.left.local_identifier.clone(),
        right: comparison.right.value(),
    })
}

fn convert_relative(relative: &JsonApiRelativeCondition) -> Result<RelativeCondition> {
    Ok(RelativeCondition {
        operator: relative.operator.parse()?,
        measure: RelativeMeasure {
            operator: relative.measure.operator.parse()?,
            left: relative.measure.left.local_identifier.clone(),
            right: relative.measure.right.local_identifier.clone(),
        },
        threshold: Some(relative.threshold.value),
    })
}

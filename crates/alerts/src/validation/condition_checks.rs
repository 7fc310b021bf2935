//! Checks on the alert condition and its execution.

use automation_core::{AlertCondition, AutomationAlert};

use super::fuzzy::{closest_metric, suggestion};
use super::ValidationResult;
use crate::metrics::AlertMetric;

fn measure_path(condition: &AlertCondition) -> &'static str {
    match condition {
        AlertCondition::Comparison(_) => "alert.condition.left",
        AlertCondition::Relative(_) => "alert.condition.measure.left",
    }
}

fn measure_id(condition: &AlertCondition) -> &str {
    match condition {
        AlertCondition::Comparison(c) => &c.left,
        AlertCondition::Relative(r) => &r.measure.left,
    }
}

/// The watched measure must be one of the supported metrics.
pub(crate) fn validate_metric<'a>(
    alert: &AutomationAlert,
    supported: &'a [AlertMetric],
    result: &mut ValidationResult,
) -> Option<&'a AlertMetric> {
    let id = measure_id(&alert.condition);
    let found = supported.iter().find(|m| m.local_identifier() == id);
    if found.is_none() {
        result.error_with_suggestion(
            measure_path(&alert.condition),
            format!("measure '{}' cannot be alerted on", id),
            closest_metric(id, supported).map(suggestion),
        );
    }
    found
}

/// A relative condition needs a comparator belonging to its metric.
pub(crate) fn validate_comparator(
    alert: &AutomationAlert,
    metric: Option<&AlertMetric>,
    result: &mut ValidationResult,
) {
    let AlertCondition::Relative(relative) = &alert.condition else {
        return;
    };
    let path = "alert.condition.measure.right";
    let right = relative.measure.right.as_str();
    if right.is_empty() {
        result.error(path, "relative condition has no comparator measure");
        return;
    }
    // An unknown metric is already reported.
    let Some(metric) = metric else {
        return;
    };
    if !metric
        .comparators
        .iter()
        .any(|c| c.measure.local_identifier == right)
    {
        result.error(
            path,
            format!(
                "comparator '{}' is not a period measure of '{}'",
                right,
                metric.local_identifier()
            ),
        );
    }
}

/// Every measure the condition references must be in the execution.
pub(crate) fn validate_execution(alert: &AutomationAlert, result: &mut ValidationResult) {
    let mut referenced = vec![measure_id(&alert.condition)];
    if let AlertCondition::Relative(r) = &alert.condition {
        if !r.measure.right.is_empty() {
            referenced.push(&r.measure.right);
        }
    }

    for id in referenced {
        let present = alert
            .execution
            .measures
            .iter()
            .any(|m| m.local_identifier == id);
        if !present {
            result.error(
                "alert.execution.measures",
                format!("measure '{}' is not part of the alert execution", id),
            );
        }
    }
}

pub(crate) fn validate_value(alert: &AutomationAlert, result: &mut ValidationResult) {
    match &alert.condition {
        AlertCondition::Comparison(c) if c.right.is_none() => {
            result.warn("alert.condition.right", "no value set")
        }
        AlertCondition::Relative(r) if r.threshold.is_none() => {
            result.warn("alert.condition.threshold", "no threshold set")
        }
        _ => {}
    }
}

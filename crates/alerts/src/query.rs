//! Read-only accessors over an optional alert.

use automation_core::{
    AlertCondition, ArithmeticOperator, AutomationAlert, ComparisonOperator, RelativeOperator,
};

/// Threshold of a relative condition, or right operand of a comparison.
pub fn get_alert_threshold(alert: Option<&AutomationAlert>) -> Option<f64> {
    match &alert?.condition {
        AlertCondition::Relative(r) => r.threshold,
        AlertCondition::Comparison(c) => c.right,
    }
}

/// Local identifier of the measure the alert watches.
pub fn get_alert_measure(alert: Option<&AutomationAlert>) -> Option<&str> {
    match &alert?.condition {
        AlertCondition::Relative(r) => Some(&r.measure.left),
        AlertCondition::Comparison(c) => Some(&c.left),
    }
}

pub fn get_alert_compare_operator(alert: Option<&AutomationAlert>) -> Option<ComparisonOperator> {
    match &alert?.condition {
        AlertCondition::Comparison(c) => Some(c.operator),
        AlertCondition::Relative(_) => None,
    }
}

pub fn get_alert_relative_operator(
    alert: Option<&AutomationAlert>,
) -> Option<(RelativeOperator, ArithmeticOperator)> {
    match &alert?.condition {
        AlertCondition::Relative(r) => Some((r.operator, r.measure.operator)),
        AlertCondition::Comparison(_) => None,
    }
}

pub fn is_alert_value_defined(alert: Option<&AutomationAlert>) -> bool {
    get_alert_threshold(alert).is_some()
}

fn arithmetic_operator(alert: Option<&AutomationAlert>) -> Option<ArithmeticOperator> {
    get_alert_relative_operator(alert).map(|(_, arithmetic)| arithmetic)
}

pub fn is_change_operator(alert: Option<&AutomationAlert>) -> bool {
    arithmetic_operator(alert) == Some(ArithmeticOperator::Change)
}

pub fn is_difference_operator(alert: Option<&AutomationAlert>) -> bool {
    arithmetic_operator(alert) == Some(ArithmeticOperator::Difference)
}

pub fn is_change_or_difference_operator(alert: Option<&AutomationAlert>) -> bool {
    is_change_operator(alert) || is_difference_operator(alert)
}

/// `"%"` for relative CHANGE conditions, nothing otherwise.
pub fn get_value_suffix(alert: Option<&AutomationAlert>) -> Option<&'static str> {
    is_change_operator(alert).then_some("%")
}

//! Selectable alert operators, their ids and default English titles.
//!
//! Comparison operators are identified by name (`GREATER_THAN`), relative
//! ones by `ARITHMETIC.RELATIVE` (`CHANGE.INCREASE_BY`).

use std::fmt;

use serde::Serialize;

use automation_core::{
    AlertAutomation, AlertCondition, ArithmeticOperator, AutomationAlert, AutomationError,
    ComparisonOperator, RelativeOperator, Result,
};

use crate::metrics::AlertMetric;
use crate::query::get_alert_threshold;

/// A parsed operator id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OperatorSelection {
    Comparison {
        operator: ComparisonOperator,
    },
    Relative {
        operator: RelativeOperator,
        arithmetic: ArithmeticOperator,
    },
}

impl OperatorSelection {
    pub fn id(&self) -> String {
        match self {
            OperatorSelection::Comparison { operator } => operator.as_str().to_string(),
            OperatorSelection::Relative {
                operator,
                arithmetic,
            } => format!("{}.{}", arithmetic.as_str(), operator.as_str()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OperatorSelection::Comparison { operator } => comparison_title(*operator),
            OperatorSelection::Relative {
                operator,
                arithmetic,
            } => relative_title(*operator, *arithmetic),
        }
    }
}

impl fmt::Display for OperatorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Parse `GREATER_THAN` or `CHANGE.INCREASE_BY` style ids.
pub fn parse_operator_id(id: &str) -> Result<OperatorSelection> {
    parse_selection(id).map_err(|_| AutomationError::UnknownOperator(id.to_string()))
}

fn parse_selection(id: &str) -> Result<OperatorSelection> {
    match id.split_once('.') {
        None => Ok(OperatorSelection::Comparison {
            operator: id.parse()?,
        }),
        Some((arithmetic, relative)) => Ok(OperatorSelection::Relative {
            operator: relative.parse()?,
            arithmetic: arithmetic.parse()?,
        }),
    }
}

/// Operators selectable for `metric`.
///
/// Relative operators need a period comparator to compare against, so they
/// are only offered when the metric has one.
pub fn available_operators(metric: Option<&AlertMetric>) -> Vec<OperatorSelection> {
    let mut operators: Vec<OperatorSelection> = ComparisonOperator::ALL
        .into_iter()
        .map(|operator| OperatorSelection::Comparison { operator })
        .collect();

    if metric.and_then(AlertMetric::period_comparator).is_some() {
        for arithmetic in [ArithmeticOperator::Change, ArithmeticOperator::Difference] {
            operators.extend(
                RelativeOperator::ALL
                    .into_iter()
                    .map(|operator| OperatorSelection::Relative {
                        operator,
                        arithmetic,
                    }),
            );
        }
    }
    operators
}

fn comparison_title(operator: ComparisonOperator) -> &'static str {
    match operator {
        ComparisonOperator::LessThan => "is less than",
        ComparisonOperator::LessThanOrEqualTo => "is less than or equal to",
        ComparisonOperator::GreaterThan => "is greater than",
        ComparisonOperator::GreaterThanOrEqualTo => "is greater than or equal to",
    }
}

fn relative_title(operator: RelativeOperator, arithmetic: ArithmeticOperator) -> &'static str {
    match (arithmetic, operator) {
        (ArithmeticOperator::Change, RelativeOperator::IncreaseBy) => "% increases by",
        (ArithmeticOperator::Change, RelativeOperator::DecreaseBy) => "% decreases by",
        (ArithmeticOperator::Change, RelativeOperator::ChangesBy) => "% changes by",
        (ArithmeticOperator::Difference, RelativeOperator::IncreaseBy) => "increases by",
        (ArithmeticOperator::Difference, RelativeOperator::DecreaseBy) => "decreases by",
        (ArithmeticOperator::Difference, RelativeOperator::ChangesBy) => "changes by",
    }
}

/// Title of the alert's operator, empty when there is no alert.
pub fn operator_title(alert: Option<&AutomationAlert>) -> &'static str {
    match alert.map(|a| &a.condition) {
        Some(AlertCondition::Comparison(c)) => comparison_title(c.operator),
        Some(AlertCondition::Relative(r)) => relative_title(r.operator, r.measure.operator),
        None => "",
    }
}

/// `"<operator title> <threshold>"`, or just the title when no value is set.
pub fn alert_description(alert: Option<&AutomationAlert>) -> String {
    let title = operator_title(alert);
    match get_alert_threshold(alert) {
        Some(value) => format!("{} {}", title, value),
        None => title.to_string(),
    }
}

pub fn is_alert_paused<A: AlertAutomation>(automation: &A) -> bool {
    automation.is_paused()
}

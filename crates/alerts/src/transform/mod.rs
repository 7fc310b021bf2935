//! Alert edits: metric, operator, threshold and destination changes.
//!
//! Every edit returns a new automation. The condition may change shape
//! between comparison and relative as a side effect, so nothing is edited in
//! place. Edits that touch the alert fail with
//! [`AutomationError::InvalidState`] when the automation has none.

mod condition;

pub use condition::{
    to_comparison_condition, to_relative_condition, transform_to_comparison_condition,
    transform_to_relative_condition,
};

use tracing::debug;

use automation_core::{
    AlertAutomation, AlertCondition, AlertExecution, AlertPolicy, ArithmeticOperator,
    AutomationAlert, AutomationDefinition, AutomationError, ComparisonOperator, Filter,
    RelativeOperator, Result,
};

use crate::defaults::create_default_alert;
use crate::metrics::AlertMetric;

/// Applies alert edits under an [`AlertPolicy`].
#[derive(Debug, Clone, Default)]
pub struct AlertTransformer {
    policy: AlertPolicy,
}

impl AlertTransformer {
    pub fn new(policy: AlertPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Point the alert at another metric.
    ///
    /// A relative condition stays relative when the metric has a period
    /// comparator; anything else becomes a comparison on the new metric.
    pub fn by_metric<A: AlertAutomation>(&self, automation: &A, metric: &AlertMetric) -> Result<A> {
        let alert = require_alert(automation)?;
        let comparator = metric.period_comparator();

        let condition = match (&alert.condition, comparator) {
            (AlertCondition::Relative(_), Some(comparator)) => {
                let mut relative = to_relative_condition(&alert.condition, &self.policy);
                relative.measure.left = metric.local_identifier().to_string();
                relative.measure.right = comparator.measure.local_identifier.clone();
                AlertCondition::Relative(relative)
            }
            _ => {
                let mut comparison = to_comparison_condition(&alert.condition, &self.policy);
                comparison.left = metric.local_identifier().to_string();
                AlertCondition::Comparison(comparison)
            }
        };

        debug!(metric = metric.local_identifier(), "alert metric changed");
        let mut next = with_condition(automation, alert, condition, metric);
        next.set_title(metric.title().to_string());
        Ok(next)
    }

    /// Force a comparison condition with `operator`, keeping operand and threshold.
    pub fn by_comparison_operator<A: AlertAutomation>(
        &self,
        automation: &A,
        metric: &AlertMetric,
        operator: ComparisonOperator,
    ) -> Result<A> {
        let alert = require_alert(automation)?;
        let mut comparison = to_comparison_condition(&alert.condition, &self.policy);
        comparison.operator = operator;
        Ok(with_condition(
            automation,
            alert,
            AlertCondition::Comparison(comparison),
            metric,
        ))
    }

    /// Force a relative condition comparing against the metric's period comparator.
    ///
    /// Without a comparator `measure.right` is left empty; the result is
    /// representable but cannot be evaluated until a comparator is chosen.
    pub fn by_relative_operator<A: AlertAutomation>(
        &self,
        automation: &A,
        metric: &AlertMetric,
        relative_operator: RelativeOperator,
        arithmetic_operator: ArithmeticOperator,
    ) -> Result<A> {
        let alert = require_alert(automation)?;
        let mut relative = to_relative_condition(&alert.condition, &self.policy);
        relative.operator = relative_operator;
        relative.measure.operator = arithmetic_operator;
        relative.measure.right = metric
            .period_comparator()
            .map(|c| c.measure.local_identifier.clone())
            .unwrap_or_default();
        if relative.measure.right.is_empty() {
            debug!(metric = metric.local_identifier(), "relative condition without comparator");
        }
        Ok(with_condition(
            automation,
            alert,
            AlertCondition::Relative(relative),
            metric,
        ))
    }

    /// Set the threshold of a relative condition or the right operand of a comparison.
    pub fn by_value<A: AlertAutomation>(&self, automation: &A, value: f64) -> Result<A> {
        let mut alert = require_alert(automation)?.clone();
        match &mut alert.condition {
            AlertCondition::Relative(r) => r.threshold = Some(value),
            AlertCondition::Comparison(c) => c.right = Some(value),
        }
        let mut next = automation.clone();
        next.set_alert(alert);
        Ok(next)
    }

    /// Replace the notification channel. The alert is not read.
    pub fn by_destination<A: AlertAutomation>(&self, automation: &A, channel_id: &str) -> A {
        let mut next = automation.clone();
        next.set_notification_channel(channel_id.to_string());
        next
    }

    /// [`create_default_alert`] with the policy's comparison operator.
    pub fn default_alert(
        &self,
        filters: Vec<Filter>,
        metric: &AlertMetric,
        notification_channel_id: &str,
    ) -> AutomationDefinition {
        create_default_alert(
            filters,
            metric,
            notification_channel_id,
            Some(self.policy.default_comparison_operator),
        )
    }
}

fn require_alert<A: AlertAutomation>(automation: &A) -> Result<&AutomationAlert> {
    automation.alert().ok_or_else(|| {
        AutomationError::InvalidState(format!(
            "automation '{}' has no alert to transform",
            automation.title()
        ))
    })
}

fn with_condition<A: AlertAutomation>(
    automation: &A,
    alert: &AutomationAlert,
    condition: AlertCondition,
    metric: &AlertMetric,
) -> A {
    let execution = execution_for(&condition, &alert.execution, metric);
    let mut next = automation.clone();
    next.set_alert(AutomationAlert {
        condition,
        execution,
        trigger: alert.trigger.clone(),
    });
    next
}

/// The metric alone, plus its comparator when the condition is relative.
fn execution_for(
    condition: &AlertCondition,
    execution: &AlertExecution,
    metric: &AlertMetric,
) -> AlertExecution {
    let mut measures = vec![metric.measure.clone()];
    if let (AlertCondition::Relative(_), Some(comparator)) = (condition, metric.period_comparator()) {
        measures.push(comparator.measure.clone());
    }
    AlertExecution {
        measures,
        ..execution.clone()
    }
}

// ── Default-policy entry points ───────────────────────────────

pub fn transform_alert_by_metric<A: AlertAutomation>(automation: &A, metric: &AlertMetric) -> Result<A> {
    AlertTransformer::default().by_metric(automation, metric)
}

pub fn transform_alert_by_comparison_operator<A: AlertAutomation>(
    automation: &A,
    metric: &AlertMetric,
    operator: ComparisonOperator,
) -> Result<A> {
    AlertTransformer::default().by_comparison_operator(automation, metric, operator)
}

pub fn transform_alert_by_relative_operator<A: AlertAutomation>(
    automation: &A,
    metric: &AlertMetric,
    relative_operator: RelativeOperator,
    arithmetic_operator: ArithmeticOperator,
) -> Result<A> {
    AlertTransformer::default().by_relative_operator(
        automation,
        metric,
        relative_operator,
        arithmetic_operator,
    )
}

pub fn transform_alert_by_value<A: AlertAutomation>(automation: &A, value: f64) -> Result<A> {
    AlertTransformer::default().by_value(automation, value)
}

pub fn transform_alert_by_destination<A: AlertAutomation>(automation: &A, channel_id: &str) -> A {
    AlertTransformer::default().by_destination(automation, channel_id)
}

#[cfg(test)]
mod tests;

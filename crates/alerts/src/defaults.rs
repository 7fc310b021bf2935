use automation_core::{
    AlertCondition, AlertExecution, AlertTrigger, AutomationAlert, AutomationDefinition,
    AutomationState, ComparisonCondition, ComparisonOperator, Filter,
};

use crate::metrics::AlertMetric;

/// A new, unsaved alert on `metric`: a comparison with no value yet.
///
/// `operator` falls back to [`ComparisonOperator::GreaterThan`].
pub fn create_default_alert(
    filters: Vec<Filter>,
    metric: &AlertMetric,
    notification_channel_id: &str,
    operator: Option<ComparisonOperator>,
) -> AutomationDefinition {
    AutomationDefinition {
        title: metric.title().to_string(),
        notification_channel: Some(notification_channel_id.to_string()),
        alert: Some(AutomationAlert {
            condition: AlertCondition::Comparison(ComparisonCondition {
                operator: operator.unwrap_or(ComparisonOperator::GreaterThan),
                left: metric.local_identifier().to_string(),
                right: None,
            }),
            execution: AlertExecution {
                attributes: Vec::new(),
                measures: vec![metric.measure.clone()],
                filters,
            },
            trigger: AlertTrigger {
                state: AutomationState::Active,
                mode: None,
            },
        }),
        ..AutomationDefinition::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{get_alert_compare_operator, get_alert_measure, is_alert_value_defined};
    use automation_core::{InlineMeasureDefinition, Measure, MeasureDefinition};

    #[test]
    fn default_alert_is_a_comparison_without_value() {
        let metric = AlertMetric::new(
            Measure::new(
                "m1",
                MeasureDefinition::Inline(InlineMeasureDefinition {
                    maql: "SELECT SUM({fact/amount})".into(),
                }),
            )
            .with_title("Revenue"),
        );
        let automation = create_default_alert(Vec::new(), &metric, "ch1", None);

        assert_eq!(automation.title, "Revenue");
        assert_eq!(automation.notification_channel.as_deref(), Some("ch1"));
        let alert = automation.alert.as_ref();
        assert_eq!(get_alert_measure(alert), Some("m1"));
        assert_eq!(get_alert_compare_operator(alert), Some(ComparisonOperator::GreaterThan));
        assert!(!is_alert_value_defined(alert));

        let alert = alert.unwrap();
        assert_eq!(alert.trigger.state, AutomationState::Active);
        assert!(alert.execution.attributes.is_empty());
        assert_eq!(alert.execution.measures, vec![metric.measure.clone()]);
    }

    #[test]
    fn explicit_operator_wins() {
        let metric = AlertMetric::new(Measure::new(
            "m1",
            MeasureDefinition::Inline(InlineMeasureDefinition { maql: "SELECT 1".into() }),
        ));
        let automation =
            create_default_alert(Vec::new(), &metric, "ch1", Some(ComparisonOperator::LessThan));
        assert_eq!(
            get_alert_compare_operator(automation.alert.as_ref()),
            Some(ComparisonOperator::LessThan)
        );
        assert_eq!(automation.title, "");
    }
}

use super::*;
use crate::metrics::AlertMetricComparatorType;
use automation_core::{
    AlertTrigger, AutomationDefinition, AutomationState, ComparisonCondition, Measure,
    MeasureDefinition, ObjRef, ObjectType, PoPMeasureDefinition,
    PreviousPeriodDateDataSet, PreviousPeriodMeasureDefinition, RelativeCondition,
    RelativeMeasure, SimpleMeasureDefinition, TriggerMode,
};

fn simple(id: &str, title: &str) -> Measure {
    Measure::new(
        id,
        MeasureDefinition::Simple(SimpleMeasureDefinition {
            item: ObjRef::id(id, ObjectType::Measure),
            aggregation: None,
            filters: Vec::new(),
            compute_ratio: false,
        }),
    )
    .with_title(title)
}

fn previous_period(id: &str, master: &str) -> Measure {
    Measure::new(
        id,
        MeasureDefinition::PreviousPeriod(PreviousPeriodMeasureDefinition {
            measure_identifier: master.into(),
            date_data_sets: vec![PreviousPeriodDateDataSet {
                data_set: ObjRef::id("date", ObjectType::DataSet),
                periods_ago: 1,
            }],
        }),
    )
}

fn pop(id: &str, master: &str) -> Measure {
    Measure::new(
        id,
        MeasureDefinition::PoP(PoPMeasureDefinition {
            measure_identifier: master.into(),
            pop_attribute: ObjRef::id("date.year", ObjectType::Attribute),
        }),
    )
}

fn plain_metric(id: &str, title: &str) -> AlertMetric {
    AlertMetric::new(simple(id, title))
}

fn period_metric(id: &str, title: &str) -> AlertMetric {
    AlertMetric::new(simple(id, title)).with_comparator(
        previous_period(&format!("{}_pp", id), id),
        AlertMetricComparatorType::PreviousPeriod,
    )
}

fn comparison_automation() -> AutomationDefinition {
    AutomationDefinition {
        title: "Revenue".into(),
        notification_channel: Some("email".into()),
        alert: Some(AutomationAlert {
            condition: AlertCondition::Comparison(ComparisonCondition {
                operator: ComparisonOperator::LessThan,
                left: "m1".into(),
                right: Some(100.0),
            }),
            execution: AlertExecution {
                measures: vec![simple("m1", "Revenue")],
                ..AlertExecution::default()
            },
            trigger: AlertTrigger {
                state: AutomationState::Active,
                mode: Some(TriggerMode::Once),
            },
        }),
        ..AutomationDefinition::default()
    }
}

fn relative_automation() -> AutomationDefinition {
    let mut automation = comparison_automation();
    if let Some(alert) = automation.alert.as_mut() {
        alert.condition = AlertCondition::Relative(RelativeCondition {
            operator: RelativeOperator::DecreaseBy,
            measure: RelativeMeasure {
                operator: ArithmeticOperator::Difference,
                left: "m1".into(),
                right: "m1_pp".into(),
            },
            threshold: Some(5.0),
        });
    }
    automation
}

fn condition(automation: &AutomationDefinition) -> &AlertCondition {
    &automation.alert.as_ref().unwrap().condition
}

fn measure_ids(automation: &AutomationDefinition) -> Vec<&str> {
    automation
        .alert
        .as_ref()
        .unwrap()
        .execution
        .measures
        .iter()
        .map(|m| m.local_identifier.as_str())
        .collect()
}

// ── by_metric ───────────────────────────────────────────────────

#[test]
fn metric_change_on_comparison_keeps_right() {
    let out = transform_alert_by_metric(&comparison_automation(), &plain_metric("m2", "Cost")).unwrap();
    match condition(&out) {
        AlertCondition::Comparison(c) => {
            assert_eq!(c.left, "m2");
            assert_eq!(c.right, Some(100.0));
            assert_eq!(c.operator, ComparisonOperator::LessThan);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
    assert_eq!(out.title, "Cost");
    assert_eq!(measure_ids(&out), vec!["m2"]);
}

#[test]
fn metric_change_on_relative_with_comparator_stays_relative() {
    let out = transform_alert_by_metric(&relative_automation(), &period_metric("m2", "Cost")).unwrap();
    match condition(&out) {
        AlertCondition::Relative(r) => {
            assert_eq!(r.measure.left, "m2");
            assert_eq!(r.measure.right, "m2_pp");
            assert_eq!(r.operator, RelativeOperator::DecreaseBy);
            assert_eq!(r.measure.operator, ArithmeticOperator::Difference);
            assert_eq!(r.threshold, Some(5.0));
        }
        other => panic!("expected relative, got {:?}", other),
    }
    assert_eq!(measure_ids(&out), vec!["m2", "m2_pp"]);
}

#[test]
fn metric_change_on_relative_without_comparator_becomes_comparison() {
    let out = transform_alert_by_metric(&relative_automation(), &plain_metric("m2", "Cost")).unwrap();
    match condition(&out) {
        AlertCondition::Comparison(c) => {
            assert_eq!(c.operator, ComparisonOperator::GreaterThan);
            assert_eq!(c.left, "m2");
            assert_eq!(c.right, Some(5.0));
        }
        other => panic!("expected comparison, got {:?}", other),
    }
    assert_eq!(measure_ids(&out), vec!["m2"]);
}

#[test]
fn metric_with_comparator_does_not_make_comparison_relative() {
    let out = transform_alert_by_metric(&comparison_automation(), &period_metric("m2", "Cost")).unwrap();
    assert!(matches!(condition(&out), AlertCondition::Comparison(_)));
    assert_eq!(measure_ids(&out), vec!["m2"]);
}

#[test]
fn metric_title_prefers_alias_then_empty() {
    let aliased = AlertMetric::new(simple("m2", "Cost").with_alias("Net cost"));
    let out = transform_alert_by_metric(&comparison_automation(), &aliased).unwrap();
    assert_eq!(out.title, "Net cost");

    let mut untitled = simple("m3", "x");
    untitled.title = None;
    let out = transform_alert_by_metric(&comparison_automation(), &AlertMetric::new(untitled)).unwrap();
    assert_eq!(out.title, "");
}

#[test]
fn same_period_previous_year_counts_as_comparator() {
    let metric = AlertMetric::new(simple("m1", "Revenue"))
        .with_comparator(pop("m1_pop", "m1"), AlertMetricComparatorType::SamePeriodPreviousYear);
    let out = transform_alert_by_metric(&relative_automation(), &metric).unwrap();
    match condition(&out) {
        AlertCondition::Relative(r) => assert_eq!(r.measure.right, "m1_pop"),
        other => panic!("expected relative, got {:?}", other),
    }
}

// ── operators ───────────────────────────────────────────────────

#[test]
fn comparison_operator_replaces_only_operator() {
    let out = transform_alert_by_comparison_operator(
        &comparison_automation(),
        &plain_metric("m1", "Revenue"),
        ComparisonOperator::GreaterThanOrEqualTo,
    )
    .unwrap();
    assert_eq!(
        condition(&out),
        &AlertCondition::Comparison(ComparisonCondition {
            operator: ComparisonOperator::GreaterThanOrEqualTo,
            left: "m1".into(),
            right: Some(100.0),
        })
    );
    assert_eq!(out.title, "Revenue");
}

#[test]
fn comparison_operator_on_relative_converts_shape() {
    let out = transform_alert_by_comparison_operator(
        &relative_automation(),
        &period_metric("m1", "Revenue"),
        ComparisonOperator::LessThanOrEqualTo,
    )
    .unwrap();
    assert_eq!(
        condition(&out),
        &AlertCondition::Comparison(ComparisonCondition {
            operator: ComparisonOperator::LessThanOrEqualTo,
            left: "m1".into(),
            right: Some(5.0),
        })
    );
    assert_eq!(measure_ids(&out), vec!["m1"]);
}

#[test]
fn relative_operator_uses_comparator() {
    let out = transform_alert_by_relative_operator(
        &comparison_automation(),
        &period_metric("m1", "Revenue"),
        RelativeOperator::ChangesBy,
        ArithmeticOperator::Change,
    )
    .unwrap();
    match condition(&out) {
        AlertCondition::Relative(r) => {
            assert_eq!(r.operator, RelativeOperator::ChangesBy);
            assert_eq!(r.measure.operator, ArithmeticOperator::Change);
            assert_eq!(r.measure.left, "m1");
            assert_eq!(r.measure.right, "m1_pp");
            assert_eq!(r.threshold, Some(100.0));
        }
        other => panic!("expected relative, got {:?}", other),
    }
    assert_eq!(measure_ids(&out), vec!["m1", "m1_pp"]);
}

#[test]
fn relative_operator_without_comparator_leaves_right_empty() {
    let out = transform_alert_by_relative_operator(
        &comparison_automation(),
        &plain_metric("m1", "Revenue"),
        RelativeOperator::IncreaseBy,
        ArithmeticOperator::Difference,
    )
    .unwrap();
    match condition(&out) {
        AlertCondition::Relative(r) => assert_eq!(r.measure.right, ""),
        other => panic!("expected relative, got {:?}", other),
    }
    assert_eq!(measure_ids(&out), vec!["m1"]);
}

// ── value and destination ───────────────────────────────────────

#[test]
fn value_sets_right_or_threshold() {
    let out = transform_alert_by_value(&comparison_automation(), 250.0).unwrap();
    match condition(&out) {
        AlertCondition::Comparison(c) => assert_eq!(c.right, Some(250.0)),
        other => panic!("expected comparison, got {:?}", other),
    }

    let out = transform_alert_by_value(&relative_automation(), 12.5).unwrap();
    match condition(&out) {
        AlertCondition::Relative(r) => {
            assert_eq!(r.threshold, Some(12.5));
            assert_eq!(r.measure.right, "m1_pp");
        }
        other => panic!("expected relative, got {:?}", other),
    }
    assert_eq!(measure_ids(&out), vec!["m1"]);
}

#[test]
fn destination_replaces_channel_only() {
    let before = comparison_automation();
    let out = transform_alert_by_destination(&before, "slack");
    assert_eq!(out.notification_channel.as_deref(), Some("slack"));
    assert_eq!(out.alert, before.alert);

    let no_alert = AutomationDefinition::default();
    let out = transform_alert_by_destination(&no_alert, "slack");
    assert_eq!(out.notification_channel.as_deref(), Some("slack"));
}

#[test]
fn edits_preserve_trigger_and_input() {
    let before = relative_automation();
    let out = transform_alert_by_metric(&before, &plain_metric("m2", "Cost")).unwrap();
    assert_eq!(out.alert.as_ref().unwrap().trigger, before.alert.as_ref().unwrap().trigger);
    // Input is untouched.
    assert!(matches!(condition(&before), AlertCondition::Relative(_)));
    assert_eq!(before.title, "Revenue");
}

#[test]
fn missing_alert_is_invalid_state() {
    let empty = AutomationDefinition::default();
    let metric = plain_metric("m1", "Revenue");
    assert!(matches!(
        transform_alert_by_metric(&empty, &metric),
        Err(AutomationError::InvalidState(_))
    ));
    assert!(matches!(
        transform_alert_by_comparison_operator(&empty, &metric, ComparisonOperator::LessThan),
        Err(AutomationError::InvalidState(_))
    ));
    assert!(matches!(
        transform_alert_by_relative_operator(
            &empty,
            &metric,
            RelativeOperator::IncreaseBy,
            ArithmeticOperator::Change
        ),
        Err(AutomationError::InvalidState(_))
    ));
    assert!(matches!(
        transform_alert_by_value(&empty, 1.0),
        Err(AutomationError::InvalidState(_))
    ));
}

#[test]
fn transformer_applies_policy() {
    let transformer = AlertTransformer::new(AlertPolicy {
        default_comparison_operator: ComparisonOperator::LessThan,
        ..AlertPolicy::default()
    });
    let out = transformer
        .by_metric(&relative_automation(), &plain_metric("m2", "Cost"))
        .unwrap();
    match condition(&out) {
        AlertCondition::Comparison(c) => assert_eq!(c.operator, ComparisonOperator::LessThan),
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn default_alert_uses_policy_operator() {
    let transformer = AlertTransformer::new(AlertPolicy {
        default_comparison_operator: ComparisonOperator::LessThanOrEqualTo,
        ..AlertPolicy::default()
    });
    let automation = transformer.default_alert(Vec::new(), &plain_metric("m1", "Revenue"), "ch1");
    match condition(&automation) {
        AlertCondition::Comparison(c) => {
            assert_eq!(c.operator, ComparisonOperator::LessThanOrEqualTo);
            assert_eq!(c.right, None);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

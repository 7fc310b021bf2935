//! Cross-shape condition mapping.
//!
//! Both directions are lossy: comparison to relative drops nothing but has no
//! comparator to put on the right, relative to comparison drops the relative
//! and arithmetic operators and the comparator.

use automation_core::{
    AlertCondition, AlertPolicy, ComparisonCondition, RelativeCondition, RelativeMeasure,
};

/// Comparison view of `condition`, defaulting the operator when converting.
pub fn to_comparison_condition(
    condition: &AlertCondition,
    policy: &AlertPolicy,
) -> ComparisonCondition {
    match condition {
        AlertCondition::Comparison(c) => c.clone(),
        AlertCondition::Relative(r) => ComparisonCondition {
            operator: policy.default_comparison_operator,
            left: r.measure.left.clone(),
            right: r.threshold,
        },
    }
}

/// Relative view of `condition`; the comparator is left empty when converting.
pub fn to_relative_condition(condition: &AlertCondition, policy: &AlertPolicy) -> RelativeCondition {
    match condition {
        AlertCondition::Relative(r) => r.clone(),
        AlertCondition::Comparison(c) => RelativeCondition {
            operator: policy.default_relative_operator,
            measure: RelativeMeasure {
                operator: policy.default_arithmetic_operator,
                left: c.left.clone(),
                right: String::new(),
            },
            threshold: c.right,
        },
    }
}

/// [`to_comparison_condition`] under the default policy.
pub fn transform_to_comparison_condition(condition: &AlertCondition) -> ComparisonCondition {
    to_comparison_condition(condition, &AlertPolicy::default())
}

/// [`to_relative_condition`] under the default policy.
pub fn transform_to_relative_condition(condition: &AlertCondition) -> RelativeCondition {
    to_relative_condition(condition, &AlertPolicy::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use automation_core::{ArithmeticOperator, ComparisonOperator, RelativeOperator};

    fn comparison() -> AlertCondition {
        AlertCondition::Comparison(ComparisonCondition {
            operator: ComparisonOperator::LessThan,
            left: "m1".into(),
            right: Some(42.0),
        })
    }

    fn relative() -> AlertCondition {
        AlertCondition::Relative(RelativeCondition {
            operator: RelativeOperator::DecreaseBy,
            measure: RelativeMeasure {
                operator: ArithmeticOperator::Difference,
                left: "m1".into(),
                right: "m1_pp".into(),
            },
            threshold: Some(7.0),
        })
    }

    #[test]
    fn comparison_to_relative_uses_defaults() {
        let r = transform_to_relative_condition(&comparison());
        assert_eq!(r.operator, RelativeOperator::IncreaseBy);
        assert_eq!(r.measure.operator, ArithmeticOperator::Change);
        assert_eq!(r.measure.left, "m1");
        assert_eq!(r.measure.right, "");
        assert_eq!(r.threshold, Some(42.0));
    }

    #[test]
    fn relative_to_comparison_uses_defaults() {
        let c = transform_to_comparison_condition(&relative());
        assert_eq!(c.operator, ComparisonOperator::GreaterThan);
        assert_eq!(c.left, "m1");
        assert_eq!(c.right, Some(7.0));
    }

    #[test]
    fn same_shape_is_unchanged() {
        match (comparison(), relative()) {
            (AlertCondition::Comparison(c), AlertCondition::Relative(r)) => {
                assert_eq!(transform_to_comparison_condition(&comparison()), c);
                assert_eq!(transform_to_relative_condition(&relative()), r);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn round_trip_is_lossy() {
        let back = transform_to_relative_condition(&AlertCondition::Comparison(
            transform_to_comparison_condition(&relative()),
        ));
        assert_eq!(back.operator, RelativeOperator::IncreaseBy);
        assert_eq!(back.measure.right, "");
    }

    #[test]
    fn policy_overrides_defaults() {
        let policy = AlertPolicy {
            default_comparison_operator: ComparisonOperator::LessThanOrEqualTo,
            default_relative_operator: RelativeOperator::ChangesBy,
            default_arithmetic_operator: ArithmeticOperator::Difference,
            ..AlertPolicy::default()
        };
        assert_eq!(
            to_comparison_condition(&relative(), &policy).operator,
            ComparisonOperator::LessThanOrEqualTo
        );
        let r = to_relative_condition(&comparison(), &policy);
        assert_eq!(r.operator, RelativeOperator::ChangesBy);
        assert_eq!(r.measure.operator, ArithmeticOperator::Difference);
    }
}

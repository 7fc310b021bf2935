//! AFM filters to SDK filters.

use automation_core::{
    AbsoluteDateFilter, AttributeElements, AutomationError, DateGranularity, Filter,
    MeasureValueComparison, MeasureValueComparisonOperator, MeasureValueCondition,
    MeasureValueFilter, MeasureValueRange, MeasureValueRangeOperator, NegativeAttributeFilter,
    PositiveAttributeFilter, RankingFilter, RankingOperator, RelativeDateFilter, Result,
};

use crate::jsonapi::AfmFilter;

use super::measure::convert_identifier;

fn comparison_operator(operator: &str) -> Result<MeasureValueComparisonOperator> {
    let converted = match operator {
        "GREATER_THAN" => MeasureValueComparisonOperator::GreaterThan,
        "GREATER_THAN_OR_EQUAL_TO" => MeasureValueComparisonOperator::GreaterThanOrEqualTo,
        "LESS_THAN" => MeasureValueComparisonOperator::LessThan,
        "LESS_THAN_OR_EQUAL_TO" => MeasureValueComparisonOperator::LessThanOrEqualTo,
        "EQUAL_TO" => MeasureValueComparisonOperator::EqualTo,
        "NOT_EQUAL_TO" => MeasureValueComparisonOperator::NotEqualTo,
        other => return Err(AutomationError::UnknownOperator(other.to_string())),
    };
    Ok(converted)
}

fn range_operator(operator: &str) -> Result<MeasureValueRangeOperator> {
    match operator {
        "BETWEEN" => Ok(MeasureValueRangeOperator::Between),
        "NOT_BETWEEN" => Ok(MeasureValueRangeOperator::NotBetween),
        other => Err(AutomationError::UnknownOperator(other.to_string())),
    }
}

fn ranking_operator(operator: &str) -> Result<RankingOperator> {
    match operator {
        "TOP" => Ok(RankingOperator::Top),
        "BOTTOM" => Ok(RankingOperator::Bottom),
        other => Err(AutomationError::UnknownOperator(other.to_string())),
    }
}

/// Convert one AFM filter into an SDK [`Filter`].
pub fn convert_filter(filter: &AfmFilter) -> Result<Filter> {
    let converted = match filter {
        AfmFilter::PositiveAttributeFilter(f) => Filter::PositiveAttribute(PositiveAttributeFilter {
            display_form: convert_identifier(&f.label)?,
            in_elements: AttributeElements::Values(f.in_elements.values.clone()),
        }),
        AfmFilter::NegativeAttributeFilter(f) => Filter::NegativeAttribute(NegativeAttributeFilter {
            display_form: convert_identifier(&f.label)?,
            not_in: AttributeElements::Values(f.not_in.values.clone()),
        }),
        AfmFilter::AbsoluteDateFilter(f) => Filter::AbsoluteDate(AbsoluteDateFilter {
            data_set: convert_identifier(&f.dataset)?,
            from: f.from.clone(),
            to: f.to.clone(),
        }),
        AfmFilter::RelativeDateFilter(f) => Filter::RelativeDate(RelativeDateFilter {
            data_set: convert_identifier(&f.dataset)?,
            granularity: DateGranularity::from_backend(&f.granularity).ok_or_else(|| {
                AutomationError::Validation(format!("unknown date granularity: '{}'", f.granularity))
            })?,
            from: f.from,
            to: f.to,
        }),
        AfmFilter::ComparisonMeasureValueFilter(f) => Filter::MeasureValue(MeasureValueFilter {
            measure: convert_identifier(&f.measure)?,
            condition: Some(MeasureValueCondition::Comparison(MeasureValueComparison {
                operator: comparison_operator(&f.operator)?,
                value: f.value,
                treat_null_values_as: f.treat_null_values_as,
            })),
        }),
        AfmFilter::RangeMeasureValueFilter(f) => Filter::MeasureValue(MeasureValueFilter {
            measure: convert_identifier(&f.measure)?,
            condition: Some(MeasureValueCondition::Range(MeasureValueRange {
                operator: range_operator(&f.operator)?,
                from: f.from,
                to: f.to,
                treat_null_values_as: f.treat_null_values_as,
            })),
        }),
        AfmFilter::RankingFilter(f) => {
            let measure = f.measures.first().ok_or_else(|| {
                AutomationError::Validation("ranking filter has no measure".to_string())
            })?;
            Filter::Ranking(RankingFilter {
                measure: convert_identifier(measure)?,
                attributes: f
                    .attributes
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(convert_identifier)
                    .collect::<Result<_>>()?,
                operator: ranking_operator(&f.operator)?,
                value: f.value,
            })
        }
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use automation_core::{ObjRef, ObjectType};

    fn filter(json: serde_json::Value) -> AfmFilter {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn positive_attribute_filter_uses_values() {
        let converted = convert_filter(&filter(serde_json::json!({
            "positiveAttributeFilter": {
                "label": {"identifier": {"id": "region.name", "type": "label"}},
                "in": {"values": ["EMEA", null]}
            }
        })))
        .unwrap();
        assert_eq!(
            converted,
            Filter::PositiveAttribute(PositiveAttributeFilter {
                display_form: ObjRef::id("region.name", ObjectType::DisplayForm),
                in_elements: AttributeElements::Values(vec![Some("EMEA".into()), None]),
            })
        );
    }

    #[test]
    fn relative_date_granularity_maps_to_sdk_name() {
        let converted = convert_filter(&filter(serde_json::json!({
            "relativeDateFilter": {
                "dataset": {"identifier": {"id": "date", "type": "dataset"}},
                "granularity": "DAY",
                "from": -6,
                "to": 0
            }
        })))
        .unwrap();
        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["relativeDateFilter"]["granularity"], "GDC.time.date");
        assert_eq!(json["relativeDateFilter"]["dataSet"]["type"], "dataSet");
    }

    #[test]
    fn comparison_measure_value_filter_gets_condition() {
        let converted = convert_filter(&filter(serde_json::json!({
            "comparisonMeasureValueFilter": {
                "measure": {"localIdentifier": "m1"},
                "operator": "GREATER_THAN",
                "value": 10
            }
        })))
        .unwrap();
        match converted {
            Filter::MeasureValue(f) => {
                assert_eq!(f.measure, ObjRef::local("m1"));
                assert!(matches!(f.condition, Some(MeasureValueCondition::Comparison(_))));
            }
            other => panic!("expected measure value filter, got {:?}", other),
        }
    }

    #[test]
    fn unknown_granularity_fails() {
        let err = convert_filter(&filter(serde_json::json!({
            "relativeDateFilter": {
                "dataset": {"identifier": {"id": "date", "type": "dataset"}},
                "granularity": "FORTNIGHT",
                "from": -1,
                "to": 0
            }
        })))
        .unwrap_err();
        assert!(matches!(err, AutomationError::Validation(_)));
    }
}

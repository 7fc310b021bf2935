//! AFM measure items to SDK measures.

use automation_core::{
    ArithmeticMeasureDefinition, ArithmeticMeasureOperator, AutomationError,
    InlineMeasureDefinition, Measure, MeasureAggregation, MeasureDefinition, ObjRef, ObjectType,
    PoPMeasureDefinition, PreviousPeriodDateDataSet, PreviousPeriodMeasureDefinition, Result,
    SimpleMeasureDefinition,
};

use crate::jsonapi::{AfmIdentifier, AfmMeasureDefinition, AfmMeasureItem};

use super::filter::convert_filter;

pub(crate) fn convert_identifier(identifier: &AfmIdentifier) -> Result<ObjRef> {
    match identifier {
        AfmIdentifier::Object { identifier } => Ok(ObjRef::id(
            identifier.id.clone(),
            ObjectType::from_backend(&identifier.object_type)?,
        )),
        AfmIdentifier::Local(local) => Ok(ObjRef::local(local.local_identifier.clone())),
    }
}

fn convert_aggregation(aggregation: &str) -> Result<MeasureAggregation> {
    let converted = match aggregation {
        "SUM" => MeasureAggregation::Sum,
        "COUNT" => MeasureAggregation::Count,
        "APPROXIMATE_COUNT" => MeasureAggregation::ApproximateCount,
        "AVG" => MeasureAggregation::Avg,
        "MIN" => MeasureAggregation::Min,
        "MAX" => MeasureAggregation::Max,
        "MEDIAN" => MeasureAggregation::Median,
        "RUNSUM" => MeasureAggregation::Runsum,
        other => {
            return Err(AutomationError::Validation(format!(
                "unknown measure aggregation: '{}'",
                other
            )))
        }
    };
    Ok(converted)
}

fn convert_arithmetic_operator(operator: &str) -> Result<ArithmeticMeasureOperator> {
    let converted = match operator {
        "SUM" => ArithmeticMeasureOperator::Sum,
        "DIFFERENCE" => ArithmeticMeasureOperator::Difference,
        "MULTIPLICATION" => ArithmeticMeasureOperator::Multiplication,
        "RATIO" => ArithmeticMeasureOperator::Ratio,
        "CHANGE" => ArithmeticMeasureOperator::Change,
        other => return Err(AutomationError::UnknownOperator(other.to_string())),
    };
    Ok(converted)
}

/// Convert one AFM measure item into an SDK [`Measure`].
///
/// `overPeriodMeasure` becomes a PoP measure keyed on its first date attribute.
pub fn convert_measure(item: &AfmMeasureItem) -> Result<Measure> {
    let definition = match &item.definition {
        AfmMeasureDefinition::Measure(m) => MeasureDefinition::Simple(SimpleMeasureDefinition {
            item: convert_identifier(&m.item)?,
            aggregation: m.aggregation.as_deref().map(convert_aggregation).transpose()?,
            filters: m.filters.iter().map(convert_filter).collect::<Result<_>>()?,
            compute_ratio: m.compute_ratio.unwrap_or(false),
        }),
        AfmMeasureDefinition::ArithmeticMeasure(m) => {
            MeasureDefinition::Arithmetic(ArithmeticMeasureDefinition {
                measure_identifiers: m
                    .measure_identifiers
                    .iter()
                    .map(|id| id.local_identifier.clone())
                    .collect(),
                operator: convert_arithmetic_operator(&m.operator)?,
            })
        }
        AfmMeasureDefinition::PreviousPeriodMeasure(m) => {
            MeasureDefinition::PreviousPeriod(PreviousPeriodMeasureDefinition {
                measure_identifier: m.measure_identifier.local_identifier.clone(),
                date_data_sets: m
                    .date_datasets
                    .iter()
                    .map(|d| {
                        Ok(PreviousPeriodDateDataSet {
                            data_set: convert_identifier(&d.dataset)?,
                            periods_ago: d.periods_ago,
                        })
                    })
                    .collect::<Result<_>>()?,
            })
        }
        AfmMeasureDefinition::OverPeriodMeasure(m) => {
            let date_attribute = m.date_attributes.first().ok_or_else(|| {
                AutomationError::Validation(format!(
                    "overPeriodMeasure '{}' has no date attributes",
                    item.local_identifier
                ))
            })?;
            MeasureDefinition::PoP(PoPMeasureDefinition {
                measure_identifier: m.measure_identifier.local_identifier.clone(),
                pop_attribute: convert_identifier(&date_attribute.attribute)?,
            })
        }
        AfmMeasureDefinition::Inline(m) => MeasureDefinition::Inline(InlineMeasureDefinition {
            maql: m.maql.clone(),
        }),
    };

    Ok(Measure::new(item.local_identifier.clone(), definition))
}

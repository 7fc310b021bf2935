//! Measures as they appear in insight buckets and alert executions.

use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::objref::ObjRef;

/// A measure scoped by its local identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub local_identifier: String,
    pub definition: MeasureDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// The different ways a measure can be defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeasureDefinition {
    /// Aggregation over a fact, attribute or stored metric.
    #[serde(rename = "measureDefinition")]
    Simple(SimpleMeasureDefinition),
    /// Arithmetic over other measures in the same execution.
    #[serde(rename = "arithmeticMeasure")]
    Arithmetic(ArithmeticMeasureDefinition),
    /// Same period previous year of a master measure.
    #[serde(rename = "popMeasureDefinition")]
    PoP(PoPMeasureDefinition),
    /// Previous period of a master measure.
    #[serde(rename = "previousPeriodMeasure")]
    PreviousPeriod(PreviousPeriodMeasureDefinition),
    #[serde(rename = "inlineDefinition")]
    Inline(InlineMeasureDefinition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMeasureDefinition {
    pub item: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<MeasureAggregation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub compute_ratio: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureAggregation {
    Sum,
    Count,
    ApproximateCount,
    Avg,
    Min,
    Max,
    Median,
    Runsum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArithmeticMeasureDefinition {
    pub measure_identifiers: Vec<String>,
    pub operator: ArithmeticMeasureOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticMeasureOperator {
    Sum,
    Difference,
    Multiplication,
    Ratio,
    Change,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoPMeasureDefinition {
    pub measure_identifier: String,
    pub pop_attribute: ObjRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousPeriodMeasureDefinition {
    pub measure_identifier: String,
    pub date_data_sets: Vec<PreviousPeriodDateDataSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousPeriodDateDataSet {
    pub data_set: ObjRef,
    pub periods_ago: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineMeasureDefinition {
    pub maql: String,
}

impl Measure {
    pub fn new(local_identifier: impl Into<String>, definition: MeasureDefinition) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            definition,
            alias: None,
            title: None,
            format: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_simple(&self) -> bool {
        matches!(self.definition, MeasureDefinition::Simple(_))
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self.definition, MeasureDefinition::Arithmetic(_))
    }

    pub fn is_pop(&self) -> bool {
        matches!(self.definition, MeasureDefinition::PoP(_))
    }

    pub fn is_previous_period(&self) -> bool {
        matches!(self.definition, MeasureDefinition::PreviousPeriod(_))
    }

    /// Display name: the alias when set, otherwise the title.
    pub fn display_title(&self) -> Option<&str> {
        self.alias.as_deref().or(self.title.as_deref())
    }

    /// Local identifier of the master measure a derived measure is computed from.
    pub fn master_measure_identifier(&self) -> Option<&str> {
        match &self.definition {
            MeasureDefinition::PoP(d) => Some(&d.measure_identifier),
            MeasureDefinition::PreviousPeriod(d) => Some(&d.measure_identifier),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectType;

    #[test]
    fn display_title_prefers_alias() {
        let base = Measure::new(
            "m1",
            MeasureDefinition::Inline(InlineMeasureDefinition {
                maql: "SELECT 1".into(),
            }),
        );
        assert_eq!(base.display_title(), None);
        let titled = base.clone().with_title("Revenue");
        assert_eq!(titled.display_title(), Some("Revenue"));
        let aliased = titled.with_alias("Net revenue");
        assert_eq!(aliased.display_title(), Some("Net revenue"));
    }

    #[test]
    fn deserialize_sdk_measure_shapes() {
        let simple: Measure = serde_json::from_str(
            r#"{
                "localIdentifier": "m1",
                "definition": {
                    "measureDefinition": {
                        "item": {"identifier": "revenue", "type": "measure"},
                        "aggregation": "sum"
                    }
                },
                "title": "Revenue"
            }"#,
        )
        .unwrap();
        match &simple.definition {
            MeasureDefinition::Simple(d) => {
                assert_eq!(d.item, ObjRef::id("revenue", ObjectType::Measure));
                assert_eq!(d.aggregation, Some(MeasureAggregation::Sum));
                assert!(!d.compute_ratio);
            }
            other => panic!("expected simple measure, got {:?}", other),
        }

        let pp: Measure = serde_json::from_str(
            r#"{
                "localIdentifier": "m1_pp",
                "definition": {
                    "previousPeriodMeasure": {
                        "measureIdentifier": "m1",
                        "dateDataSets": [{"dataSet": {"identifier": "date", "type": "dataSet"}, "periodsAgo": 1}]
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(pp.is_previous_period());
        assert_eq!(pp.master_measure_identifier(), Some("m1"));
    }
}

//! AFM (execution definition) measures and filters in backend form.

use serde::{Deserialize, Serialize};

/// `{"identifier": {"id": ..., "type": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmObjectIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

/// `{"localIdentifier": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmLocalIdentifier {
    #[serde(rename = "localIdentifier")]
    pub local_identifier: String,
}

/// Either a workspace object or a local item of the same execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AfmIdentifier {
    Object { identifier: AfmObjectIdentifier },
    Local(AfmLocalIdentifier),
}

// ── Measures ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmMeasureItem {
    pub local_identifier: String,
    pub definition: AfmMeasureDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfmMeasureDefinition {
    Measure(AfmSimpleMeasure),
    ArithmeticMeasure(AfmArithmeticMeasure),
    PreviousPeriodMeasure(AfmPreviousPeriodMeasure),
    OverPeriodMeasure(AfmOverPeriodMeasure),
    Inline(AfmInlineMeasure),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmSimpleMeasure {
    pub item: AfmIdentifier,
    #[serde(default)]
    pub aggregation: Option<String>,
    #[serde(default)]
    pub compute_ratio: Option<bool>,
    #[serde(default)]
    pub filters: Vec<AfmFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmArithmeticMeasure {
    pub measure_identifiers: Vec<AfmLocalIdentifier>,
    pub operator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmPreviousPeriodMeasure {
    pub measure_identifier: AfmLocalIdentifier,
    pub date_datasets: Vec<AfmDateDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmDateDataset {
    pub dataset: AfmIdentifier,
    pub periods_ago: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmOverPeriodMeasure {
    pub measure_identifier: AfmLocalIdentifier,
    pub date_attributes: Vec<AfmDateAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmDateAttribute {
    pub attribute: AfmIdentifier,
    pub periods_ago: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmInlineMeasure {
    pub maql: String,
}

// ── Filters ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfmFilter {
    PositiveAttributeFilter(AfmPositiveAttributeFilter),
    NegativeAttributeFilter(AfmNegativeAttributeFilter),
    AbsoluteDateFilter(AfmAbsoluteDateFilter),
    RelativeDateFilter(AfmRelativeDateFilter),
    ComparisonMeasureValueFilter(AfmComparisonMeasureValueFilter),
    RangeMeasureValueFilter(AfmRangeMeasureValueFilter),
    RankingFilter(AfmRankingFilter),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmAttributeElements {
    #[serde(default)]
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmPositiveAttributeFilter {
    pub label: AfmIdentifier,
    #[serde(rename = "in")]
    pub in_elements: AfmAttributeElements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmNegativeAttributeFilter {
    pub label: AfmIdentifier,
    pub not_in: AfmAttributeElements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmAbsoluteDateFilter {
    pub dataset: AfmIdentifier,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmRelativeDateFilter {
    pub dataset: AfmIdentifier,
    pub granularity: String,
    pub from: i32,
    pub to: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmComparisonMeasureValueFilter {
    pub measure: AfmIdentifier,
    pub operator: String,
    pub value: f64,
    #[serde(default)]
    pub treat_null_values_as: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmRangeMeasureValueFilter {
    pub measure: AfmIdentifier,
    pub operator: String,
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub treat_null_values_as: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfmRankingFilter {
    pub measures: Vec<AfmIdentifier>,
    #[serde(default)]
    pub attributes: Option<Vec<AfmIdentifier>>,
    pub operator: String,
    pub value: u32,
}

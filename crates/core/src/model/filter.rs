//! Execution filters: attribute, date, measure value and ranking filters.

use serde::{Deserialize, Serialize};

use super::objref::ObjRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    #[serde(rename = "positiveAttributeFilter")]
    PositiveAttribute(PositiveAttributeFilter),
    #[serde(rename = "negativeAttributeFilter")]
    NegativeAttribute(NegativeAttributeFilter),
    #[serde(rename = "absoluteDateFilter")]
    AbsoluteDate(AbsoluteDateFilter),
    #[serde(rename = "relativeDateFilter")]
    RelativeDate(RelativeDateFilter),
    #[serde(rename = "measureValueFilter")]
    MeasureValue(MeasureValueFilter),
    #[serde(rename = "rankingFilter")]
    Ranking(RankingFilter),
}

/// Attribute elements selected by a filter, either by URI or by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeElements {
    Uris(Vec<Option<String>>),
    Values(Vec<Option<String>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveAttributeFilter {
    pub display_form: ObjRef,
    #[serde(rename = "in")]
    pub in_elements: AttributeElements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeAttributeFilter {
    pub display_form: ObjRef,
    pub not_in: AttributeElements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteDateFilter {
    pub data_set: ObjRef,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeDateFilter {
    pub data_set: ObjRef,
    pub granularity: DateGranularity,
    pub from: i32,
    pub to: i32,
}

/// Date granularities in their SDK (`GDC.time.*`) spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateGranularity {
    #[serde(rename = "GDC.time.minute")]
    Minute,
    #[serde(rename = "GDC.time.hour")]
    Hour,
    #[serde(rename = "GDC.time.date")]
    Date,
    #[serde(rename = "GDC.time.week_us")]
    Week,
    #[serde(rename = "GDC.time.month")]
    Month,
    #[serde(rename = "GDC.time.quarter")]
    Quarter,
    #[serde(rename = "GDC.time.year")]
    Year,
    #[serde(rename = "GDC.time.minute_in_hour")]
    MinuteOfHour,
    #[serde(rename = "GDC.time.hour_in_day")]
    HourOfDay,
    #[serde(rename = "GDC.time.day_in_week")]
    DayOfWeek,
    #[serde(rename = "GDC.time.day_in_month")]
    DayOfMonth,
    #[serde(rename = "GDC.time.day_in_year")]
    DayOfYear,
    #[serde(rename = "GDC.time.week_in_year")]
    WeekOfYear,
    #[serde(rename = "GDC.time.month_in_year")]
    MonthOfYear,
    #[serde(rename = "GDC.time.quarter_in_year")]
    QuarterOfYear,
}

impl DateGranularity {
    /// Map a backend granularity name (`DAY`, `WEEK`, ...) to its SDK counterpart.
    pub fn from_backend(granularity: &str) -> Option<Self> {
        let g = match granularity {
            "MINUTE" => DateGranularity::Minute,
            "HOUR" => DateGranularity::Hour,
            "DAY" => DateGranularity::Date,
            "WEEK" => DateGranularity::Week,
            "MONTH" => DateGranularity::Month,
            "QUARTER" => DateGranularity::Quarter,
            "YEAR" => DateGranularity::Year,
            "MINUTE_OF_HOUR" => DateGranularity::MinuteOfHour,
            "HOUR_OF_DAY" => DateGranularity::HourOfDay,
            "DAY_OF_WEEK" => DateGranularity::DayOfWeek,
            "DAY_OF_MONTH" => DateGranularity::DayOfMonth,
            "DAY_OF_YEAR" => DateGranularity::DayOfYear,
            "WEEK_OF_YEAR" => DateGranularity::WeekOfYear,
            "MONTH_OF_YEAR" => DateGranularity::MonthOfYear,
            "QUARTER_OF_YEAR" => DateGranularity::QuarterOfYear,
            _ => return None,
        };
        Some(g)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureValueFilter {
    pub measure: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MeasureValueCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasureValueCondition {
    Comparison(MeasureValueComparison),
    Range(MeasureValueRange),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureValueComparison {
    pub operator: MeasureValueComparisonOperator,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_null_values_as: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasureValueComparisonOperator {
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    EqualTo,
    NotEqualTo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureValueRange {
    pub operator: MeasureValueRangeOperator,
    pub from: f64,
    pub to: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_null_values_as: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasureValueRangeOperator {
    Between,
    NotBetween,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingFilter {
    pub measure: ObjRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ObjRef>,
    pub operator: RankingOperator,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankingOperator {
    Top,
    Bottom,
}

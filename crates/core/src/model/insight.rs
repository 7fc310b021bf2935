//! Insights (saved visualizations) and their buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::filter::Filter;
use super::measure::Measure;
use super::objref::ObjRef;

/// Well-known bucket local identifiers.
pub mod bucket_names {
    pub const MEASURES: &str = "measures";
    pub const SECONDARY_MEASURES: &str = "secondary_measures";
    pub const TERTIARY_MEASURES: &str = "tertiary_measures";
    pub const COLUMNS: &str = "columns";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub local_identifier: String,
    pub display_form: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A bucket item: either a measure or an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketItem {
    Measure(Measure),
    Attribute(Attribute),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(default)]
    pub local_identifier: Option<String>,
    #[serde(default)]
    pub items: Vec<BucketItem>,
}

impl Bucket {
    /// All measures in the bucket, in bucket order.
    pub fn measures(&self) -> impl Iterator<Item = &Measure> {
        self.items.iter().filter_map(|item| match item {
            BucketItem::Measure(m) => Some(m),
            BucketItem::Attribute(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Visualization URL, e.g. `local:headline`.
    pub visualization_url: String,
    #[serde(default)]
    pub buckets: Vec<Bucket>,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl Insight {
    pub fn visualization_type(&self) -> VisualizationType {
        let name = self
            .visualization_url
            .strip_prefix("local:")
            .unwrap_or(&self.visualization_url);
        name.parse().unwrap_or(VisualizationType::Unknown)
    }

    /// First bucket with the given local identifier.
    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|b| b.local_identifier.as_deref() == Some(name))
    }
}

/// Visualization kinds an insight can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    Headline,
    Scatter,
    Donut,
    Treemap,
    Combo2,
    Heatmap,
    Bubble,
    Bullet,
    Bar,
    Table,
    Area,
    Column,
    Line,
    Pushpin,
    Pie,
    Sankey,
    DependencyWheel,
    Funnel,
    Pyramid,
    Waterfall,
    Repeater,
    Unknown,
}

impl VisualizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::Headline => "headline",
            VisualizationType::Scatter => "scatter",
            VisualizationType::Donut => "donut",
            VisualizationType::Treemap => "treemap",
            VisualizationType::Combo2 => "combo2",
            VisualizationType::Heatmap => "heatmap",
            VisualizationType::Bubble => "bubble",
            VisualizationType::Bullet => "bullet",
            VisualizationType::Bar => "bar",
            VisualizationType::Table => "table",
            VisualizationType::Area => "area",
            VisualizationType::Column => "column",
            VisualizationType::Line => "line",
            VisualizationType::Pushpin => "pushpin",
            VisualizationType::Pie => "pie",
            VisualizationType::Sankey => "sankey",
            VisualizationType::DependencyWheel => "dependencywheel",
            VisualizationType::Funnel => "funnel",
            VisualizationType::Pyramid => "pyramid",
            VisualizationType::Waterfall => "waterfall",
            VisualizationType::Repeater => "repeater",
            VisualizationType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualizationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "headline" => Ok(VisualizationType::Headline),
            "scatter" => Ok(VisualizationType::Scatter),
            "donut" => Ok(VisualizationType::Donut),
            "treemap" => Ok(VisualizationType::Treemap),
            "combo2" => Ok(VisualizationType::Combo2),
            "heatmap" => Ok(VisualizationType::Heatmap),
            "bubble" => Ok(VisualizationType::Bubble),
            "bullet" => Ok(VisualizationType::Bullet),
            "bar" => Ok(VisualizationType::Bar),
            "table" => Ok(VisualizationType::Table),
            "area" => Ok(VisualizationType::Area),
            "column" => Ok(VisualizationType::Column),
            "line" => Ok(VisualizationType::Line),
            "pushpin" => Ok(VisualizationType::Pushpin),
            "pie" => Ok(VisualizationType::Pie),
            "sankey" => Ok(VisualizationType::Sankey),
            "dependencywheel" => Ok(VisualizationType::DependencyWheel),
            "funnel" => Ok(VisualizationType::Funnel),
            "pyramid" => Ok(VisualizationType::Pyramid),
            "waterfall" => Ok(VisualizationType::Waterfall),
            "repeater" => Ok(VisualizationType::Repeater),
            other => Err(format!("unknown visualization type: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visualization_type_from_url() {
        let insight = Insight {
            identifier: None,
            title: "KPI".into(),
            visualization_url: "local:headline".into(),
            buckets: vec![],
            filters: vec![],
        };
        assert_eq!(insight.visualization_type(), VisualizationType::Headline);

        let odd = Insight {
            visualization_url: "local:hologram".into(),
            ..insight
        };
        assert_eq!(odd.visualization_type(), VisualizationType::Unknown);
    }

    #[test]
    fn bucket_items_are_externally_tagged() {
        let bucket: Bucket = serde_json::from_str(
            r#"{
                "localIdentifier": "columns",
                "items": [
                    {"attribute": {"localIdentifier": "a1", "displayForm": {"identifier": "region", "type": "displayForm"}}},
                    {"measure": {"localIdentifier": "m1", "definition": {"inlineDefinition": {"maql": "SELECT 1"}}}}
                ]
            }"#,
        )
        .unwrap();
        let ids: Vec<&str> = bucket.measures().map(|m| m.local_identifier.as_str()).collect();
        assert_eq!(ids, vec!["m1"]);
    }
}

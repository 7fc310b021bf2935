//! Automation alert conversion and editing.
//!
//! This crate provides:
//! - Backend JSON:API automation payloads and their conversion into SDK automations
//! - Alert edits (metric, operator, threshold, destination) that switch
//!   between comparison and relative conditions
//! - Alertable metric discovery over an insight's buckets
//! - Operator catalogue, alert validation and a filesystem loader

pub mod convert;
pub mod defaults;
pub mod jsonapi;
pub mod loader;
pub mod metrics;
pub mod operators;
pub mod query;
pub mod transform;
pub mod validation;

pub use convert::{convert_automation, convert_automation_list_to_automations};
pub use defaults::create_default_alert;
pub use loader::{AutomationLoader, LoadResult, LoadStatus};
pub use metrics::{
    get_supported_insight_measures_by_insight, AlertMetric, AlertMetricComparator,
    AlertMetricComparatorType, MetricDiscovery,
};
pub use operators::{
    alert_description, available_operators, is_alert_paused, operator_title, parse_operator_id,
    OperatorSelection,
};
pub use query::*;
pub use transform::{
    transform_alert_by_comparison_operator, transform_alert_by_destination,
    transform_alert_by_metric, transform_alert_by_relative_operator, transform_alert_by_value,
    transform_to_comparison_condition, transform_to_relative_condition, AlertTransformer,
};
pub use validation::{validate_alert, ValidationResult};

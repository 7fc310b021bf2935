//! Alertable metric discovery over an insight's buckets.

use serde::{Deserialize, Serialize};
use tracing::debug;

use automation_core::{
    bucket_names, AlertPolicy, Insight, Measure, VisualizationType,
};

/// How a comparator measure relates to the metric it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertMetricComparatorType {
    PreviousPeriod,
    SamePeriodPreviousYear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMetricComparator {
    pub measure: Measure,
    pub comparator: AlertMetricComparatorType,
}

/// A measure a user can alert on, with the period measures it can be compared to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMetric {
    pub measure: Measure,
    #[serde(default)]
    pub comparators: Vec<AlertMetricComparator>,
}

impl AlertMetric {
    pub fn new(measure: Measure) -> Self {
        Self {
            measure,
            comparators: Vec::new(),
        }
    }

    pub fn with_comparator(mut self, measure: Measure, comparator: AlertMetricComparatorType) -> Self {
        self.comparators.push(AlertMetricComparator { measure, comparator });
        self
    }

    pub fn local_identifier(&self) -> &str {
        &self.measure.local_identifier
    }

    /// Alias, else title, else empty.
    pub fn title(&self) -> &str {
        self.measure.display_title().unwrap_or_default()
    }

    /// First comparator usable by a relative condition.
    pub fn period_comparator(&self) -> Option<&AlertMetricComparator> {
        self.comparators.iter().find(|c| {
            matches!(
                c.comparator,
                AlertMetricComparatorType::PreviousPeriod
                    | AlertMetricComparatorType::SamePeriodPreviousYear
            )
        })
    }
}

/// Metric discovery under a given [`AlertPolicy`].
#[derive(Debug, Clone, Default)]
pub struct MetricDiscovery {
    policy: AlertPolicy,
}

impl MetricDiscovery {
    pub fn new(policy: AlertPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Simple and arithmetic measures of the insight, in bucket order.
    ///
    /// Previous-period and period-over-period measures are never returned on
    /// their own; they are attached as comparators to the measure they
    /// derive from, and only for visualizations the policy allows.
    pub fn supported_measures(&self, insight: Option<&Insight>) -> Vec<AlertMetric> {
        let Some(insight) = insight else {
            return Vec::new();
        };
        let visualization = insight.visualization_type();
        let candidates = collect_measures(insight, visualization);

        let mut metrics: Vec<AlertMetric> = candidates
            .iter()
            .filter(|m| m.is_simple() || m.is_arithmetic())
            .map(|m| AlertMetric::new((*m).clone()))
            .collect();

        if self.policy.supports_comparators(visualization) {
            attach_comparators(
                &mut metrics,
                &candidates,
                Measure::is_previous_period,
                AlertMetricComparatorType::PreviousPeriod,
            );
            attach_comparators(
                &mut metrics,
                &candidates,
                Measure::is_pop,
                AlertMetricComparatorType::SamePeriodPreviousYear,
            );
        }

        debug!(
            visualization = %visualization,
            candidates = candidates.len(),
            metrics = metrics.len(),
            "discovered alertable metrics"
        );
        metrics
    }
}

/// [`MetricDiscovery::supported_measures`] under the default policy.
pub fn get_supported_insight_measures_by_insight(insight: Option<&Insight>) -> Vec<AlertMetric> {
    MetricDiscovery::default().supported_measures(insight)
}

/// Bucket names that contribute candidate measures for a visualization.
pub fn metric_buckets(visualization: VisualizationType) -> &'static [&'static str] {
    use VisualizationType::*;
    match visualization {
        Headline | Bar | Column | Line | Area | Combo2 | Scatter | Bubble => &[
            bucket_names::MEASURES,
            bucket_names::SECONDARY_MEASURES,
            bucket_names::TERTIARY_MEASURES,
        ],
        Repeater => &[bucket_names::COLUMNS],
        _ => &[],
    }
}

fn collect_measures(insight: &Insight, visualization: VisualizationType) -> Vec<&Measure> {
    metric_buckets(visualization)
        .iter()
        .filter_map(|name| insight.bucket(name))
        .flat_map(|bucket| bucket.measures())
        .collect()
}

fn attach_comparators(
    metrics: &mut [AlertMetric],
    candidates: &[&Measure],
    is_kind: fn(&Measure) -> bool,
    comparator: AlertMetricComparatorType,
) {
    for measure in candidates.iter().filter(|m| is_kind(m)) {
        let Some(master) = measure.master_measure_identifier() else {
            continue;
        };
        if let Some(metric) = metrics.iter_mut().find(|m| m.local_identifier() == master) {
            metric.comparators.push(AlertMetricComparator {
                measure: (*measure).clone(),
                comparator,
            });
        }
    }
}

//! "Did you mean" suggestions for unknown metric references.

use crate::metrics::AlertMetric;

/// Largest edit distance still worth suggesting.
const MAX_DISTANCE: usize = 4;

/// Supported metric closest to `input`, matched against both local
/// identifiers and display titles, ignoring case.
///
/// Alerts reference metrics by local identifier, but a user typing a metric
/// name usually types its title, so either side can produce the suggestion.
pub(crate) fn closest_metric<'a>(
    input: &str,
    metrics: &'a [AlertMetric],
) -> Option<&'a AlertMetric> {
    let input = input.to_lowercase();
    metrics
        .iter()
        .enumerate()
        .filter_map(|(position, metric)| {
            let by_id = strsim::osa_distance(&input, &metric.local_identifier().to_lowercase());
            let by_title = match metric.title() {
                "" => usize::MAX,
                title => strsim::osa_distance(&input, &title.to_lowercase()),
            };
            let dist = by_id.min(by_title);
            (dist <= MAX_DISTANCE && dist * 2 <= input.chars().count().max(1))
                .then_some((dist, position, metric))
        })
        .min_by_key(|(dist, position, _)| (*dist, *position))
        .map(|(_, _, metric)| metric)
}

/// Suggestion text naming the metric by id, and by title when it has one.
pub(crate) fn suggestion(metric: &AlertMetric) -> String {
    match metric.title() {
        "" => format!("did you mean '{}'?", metric.local_identifier()),
        title => format!("did you mean '{}' ({})?", metric.local_identifier(), title),
    }
}

//! Subcommand handlers.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use automation_alerts::operators::OperatorSelection;
use automation_alerts::{
    alert_description, get_alert_measure, is_alert_paused, parse_operator_id, validate_alert,
    AlertMetric, AlertTransformer, AutomationLoader, LoadStatus, MetricDiscovery,
    ValidationResult,
};
use automation_core::{AutomationMetadataObject, Config, Insight};

fn print_json<T: Serialize>(config: &Config, value: &T) -> Result<()> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn load_automations(file: &Path) -> Result<Vec<AutomationMetadataObject>> {
    let loader = AutomationLoader::new(file.parent().unwrap_or(Path::new(".")));
    loader
        .load_file(file)
        .with_context(|| format!("failed to load automations from {}", file.display()))
}

fn load_insight(path: &Path) -> Result<Insight> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read insight {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse insight {}", path.display()))
}

pub fn convert(config: &Config, file: &Path) -> Result<()> {
    let automations = load_automations(file)?;
    info!(count = automations.len(), "converted automations");
    print_json(config, &automations)
}

pub fn list(dir: &Path) -> Result<()> {
    for line in list_lines(dir)? {
        println!("{}", line);
    }
    Ok(())
}

/// One tab-separated line per alert automation under `dir`.
fn list_lines(dir: &Path) -> Result<Vec<String>> {
    let mut loader = AutomationLoader::new(dir);
    let results = loader
        .load_all()
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    for result in &results {
        if let LoadStatus::Failed { error } = &result.status {
            eprintln!("{}: {}", result.path.display(), error);
        }
    }

    Ok(loader
        .automations()
        .iter()
        .filter_map(|automation| {
            let alert = automation.alert.as_ref()?;
            Some(format!(
                "{}\t{}\t{}{}",
                automation.id,
                automation.title,
                alert_description(Some(alert)),
                if is_alert_paused(automation) { "\t(paused)" } else { "" }
            ))
        })
        .collect())
}

pub fn metrics(config: &Config, insight: &Path) -> Result<()> {
    let insight = load_insight(insight)?;
    let metrics = MetricDiscovery::new(config.alerts.clone()).supported_measures(Some(&insight));
    if metrics.is_empty() {
        eprintln!(
            "{} ({}) has no alertable metrics",
            insight.title,
            insight.visualization_type()
        );
    }
    for metric in &metrics {
        let comparators: Vec<&str> = metric
            .comparators
            .iter()
            .map(|c| c.measure.local_identifier.as_str())
            .collect();
        println!(
            "{}\t{}\t{}",
            metric.local_identifier(),
            metric.title(),
            comparators.join(",")
        );
    }
    Ok(())
}

pub struct EditArgs<'a> {
    pub file: &'a Path,
    pub id: &'a str,
    pub insight: &'a Path,
    pub metric: Option<&'a str>,
    pub operator: Option<&'a str>,
    pub value: Option<f64>,
    pub destination: Option<&'a str>,
}

fn find_metric<'m>(metrics: &'m [AlertMetric], id: &str) -> Result<&'m AlertMetric> {
    metrics
        .iter()
        .find(|m| m.local_identifier() == id)
        .with_context(|| format!("metric '{}' is not alertable in this insight", id))
}

pub fn edit(config: &Config, args: EditArgs<'_>) -> Result<()> {
    let (automation, validation) = apply_edits(config, &args)?;
    print_json(config, &automation)?;

    for error in &validation.errors {
        match &error.suggestion {
            Some(suggestion) => eprintln!("error: {}: {} ({})", error.path, error.message, suggestion),
            None => eprintln!("error: {}: {}", error.path, error.message),
        }
    }
    for warning in &validation.warnings {
        eprintln!("warning: {}: {}", warning.path, warning.message);
    }
    if !validation.valid {
        bail!("edited alert is not valid");
    }
    Ok(())
}

/// Apply the requested edits in a fixed order: metric, operator, value,
/// destination. The operator is resolved against whichever metric the alert
/// references once the metric edit is done.
fn apply_edits(
    config: &Config,
    args: &EditArgs<'_>,
) -> Result<(AutomationMetadataObject, ValidationResult)> {
    if args.metric.is_none()
        && args.operator.is_none()
        && args.value.is_none()
        && args.destination.is_none()
    {
        bail!("nothing to edit: pass --metric, --operator, --value or --destination");
    }

    let mut automation = load_automations(args.file)?
        .into_iter()
        .find(|a| a.id == args.id)
        .with_context(|| format!("automation '{}' not found in {}", args.id, args.file.display()))?;
    let insight = load_insight(args.insight)?;
    let metrics = MetricDiscovery::new(config.alerts.clone()).supported_measures(Some(&insight));
    let transformer = AlertTransformer::new(config.alerts.clone());

    if let Some(metric) = args.metric {
        automation = transformer.by_metric(&automation, find_metric(&metrics, metric)?)?;
    }

    if let Some(operator) = args.operator {
        let current = get_alert_measure(automation.alert.as_ref())
            .context("automation has no alert")?
            .to_string();
        let metric = find_metric(&metrics, &current)?;
        automation = match parse_operator_id(operator)? {
            OperatorSelection::Comparison { operator } => {
                transformer.by_comparison_operator(&automation, metric, operator)?
            }
            OperatorSelection::Relative {
                operator,
                arithmetic,
            } => transformer.by_relative_operator(&automation, metric, operator, arithmetic)?,
        };
    }

    if let Some(value) = args.value {
        automation = transformer.by_value(&automation, value)?;
    }

    if let Some(destination) = args.destination {
        automation = transformer.by_destination(&automation, destination);
    }

    let validation = validate_alert(&automation, &metrics);
    Ok((automation, validation))
}

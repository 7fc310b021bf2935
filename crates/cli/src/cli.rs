use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and edit automation alerts exported from the backend.
#[derive(Parser, Debug)]
#[command(name = "automation-cli", version, about = "Convert, list and edit automation alerts")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Print compact JSON regardless of AUTOMATION_PRETTY_OUTPUT
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a JSON:API automation document and print the SDK objects.
    Convert {
        /// Path to the automation document
        file: PathBuf,
    },
    /// Load a directory of automation documents and list their alerts.
    List {
        /// Directory scanned recursively for *.json documents
        dir: PathBuf,
    },
    /// List the alertable metrics of an insight.
    Metrics {
        /// Path to the insight JSON
        insight: PathBuf,
    },
    /// Apply edits to one automation's alert and print the result.
    ///
    /// Edits are applied in order: metric, operator, value, destination.
    Edit {
        /// Path to the automation document
        file: PathBuf,
        /// Automation id within the document
        #[arg(long)]
        id: String,
        /// Insight providing the alertable metrics
        #[arg(long)]
        insight: PathBuf,
        /// Switch to the metric with this local identifier
        #[arg(long)]
        metric: Option<String>,
        /// Operator id, e.g. GREATER_THAN or CHANGE.INCREASE_BY
        #[arg(long)]
        operator: Option<String>,
        /// Threshold value
        #[arg(long, allow_hyphen_values = true)]
        value: Option<f64>,
        /// Notification channel id
        #[arg(long)]
        destination: Option<String>,
    },
}

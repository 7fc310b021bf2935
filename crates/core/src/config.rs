use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{ArithmeticOperator, ComparisonOperator, RelativeOperator, VisualizationType};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        Some(other) => {
            tracing::warn!(key, value = other, "invalid boolean, using default");
            default
        }
        None => default,
    }
}

/// Parse a profiled env var, warning and falling back to `default` on bad input.
fn profiled_env_parsed<T: FromStr>(profile: &str, key: &str, default: T) -> T {
    match profiled_env_opt(profile, key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            default
        }),
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub alerts: AlertPolicy,
    pub output: OutputConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `AUTOMATION_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("AUTOMATION_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            alerts: AlertPolicy::from_env_profiled(p),
            output: OutputConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        let visualizations: Vec<&str> = self
            .alerts
            .comparator_visualizations
            .iter()
            .map(|v| v.as_str())
            .collect();
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  alerts:  comparison={}, relative={}, arithmetic={}",
            self.alerts.default_comparison_operator,
            self.alerts.default_relative_operator,
            self.alerts.default_arithmetic_operator
        );
        tracing::info!("  alerts:  comparator_visualizations={}", visualizations.join(","));
        tracing::info!("  output:  pretty={}", self.output.pretty);
    }
}

// ── Alert policy ──────────────────────────────────────────────

/// Product-policy defaults applied by the alert transformer and metric discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Operator used when a condition is forced into comparison shape.
    pub default_comparison_operator: ComparisonOperator,
    /// Operator used when a condition is forced into relative shape.
    pub default_relative_operator: RelativeOperator,
    pub default_arithmetic_operator: ArithmeticOperator,
    /// Visualizations whose period measures become comparators.
    pub comparator_visualizations: Vec<VisualizationType>,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            default_comparison_operator: ComparisonOperator::GreaterThan,
            default_relative_operator: RelativeOperator::IncreaseBy,
            default_arithmetic_operator: ArithmeticOperator::Change,
            comparator_visualizations: vec![VisualizationType::Headline],
        }
    }
}

impl AlertPolicy {
    fn from_env_profiled(p: &str) -> Self {
        let defaults = Self::default();
        let comparator_visualizations = match profiled_env_opt(p, "ALERT_COMPARATOR_VISUALIZATIONS") {
            Some(raw) => parse_visualization_list(&raw),
            None => defaults.comparator_visualizations,
        };
        Self {
            default_comparison_operator: profiled_env_parsed(
                p,
                "ALERT_DEFAULT_COMPARISON_OPERATOR",
                defaults.default_comparison_operator,
            ),
            default_relative_operator: profiled_env_parsed(
                p,
                "ALERT_DEFAULT_RELATIVE_OPERATOR",
                defaults.default_relative_operator,
            ),
            default_arithmetic_operator: profiled_env_parsed(
                p,
                "ALERT_DEFAULT_ARITHMETIC_OPERATOR",
                defaults.default_arithmetic_operator,
            ),
            comparator_visualizations,
        }
    }

    pub fn supports_comparators(&self, visualization: VisualizationType) -> bool {
        self.comparator_visualizations.contains(&visualization)
    }
}

/// Comma-separated visualization names; unknown names are skipped with a warning.
fn parse_visualization_list(raw: &str) -> Vec<VisualizationType> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|name| match name.parse() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring comparator visualization");
                None
            }
        })
        .collect()
}

// ── Output ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl OutputConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            pretty: profiled_env_bool(p, "AUTOMATION_PRETTY_OUTPUT", true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_product_defaults() {
        let policy = AlertPolicy::default();
        assert_eq!(policy.default_comparison_operator, ComparisonOperator::GreaterThan);
        assert_eq!(policy.default_relative_operator, RelativeOperator::IncreaseBy);
        assert_eq!(policy.default_arithmetic_operator, ArithmeticOperator::Change);
        assert!(policy.supports_comparators(VisualizationType::Headline));
        assert!(!policy.supports_comparators(VisualizationType::Bar));
    }

    #[test]
    fn visualization_list_skips_unknown_names() {
        let parsed = parse_visualization_list("headline, bar,,hologram");
        assert_eq!(parsed, vec![VisualizationType::Headline, VisualizationType::Bar]);
    }

    #[test]
    fn profiled_lookup_prefers_prefixed_key() {
        // Keys unique to this test so parallel tests do not interfere.
        env::set_var("CFGTEST_ALERT_DEFAULT_COMPARISON_OPERATOR", "LESS_THAN");
        let policy = AlertPolicy::from_env_profiled("CFGTEST");
        assert_eq!(policy.default_comparison_operator, ComparisonOperator::LessThan);
        env::remove_var("CFGTEST_ALERT_DEFAULT_COMPARISON_OPERATOR");
    }
}

//! Automation resource documents as returned by the backend.

use serde::{Deserialize, Serialize};

use super::included::JsonApiIncluded;

/// A page of automations with their side-loaded resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiAutomationOutList {
    pub data: Vec<JsonApiAutomationOutWithLinks>,
    #[serde(default)]
    pub included: Option<Vec<JsonApiIncluded>>,
    #[serde(default)]
    pub links: Option<serde_json::Value>,
}

/// A single automation resource. Both `attributes` and `relationships`
/// may be missing or partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiAutomationOutWithLinks {
    pub id: String,
    #[serde(rename = "type", default = "automation_type")]
    pub resource_type: String,
    #[serde(default)]
    pub attributes: JsonApiAutomationAttributes,
    #[serde(default)]
    pub relationships: JsonApiAutomationRelationships,
    #[serde(default)]
    pub links: Option<serde_json::Value>,
}

fn automation_type() -> String {
    "automation".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiAutomationAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub schedule: Option<serde_json::Value>,
    /// Kept raw and parsed into [`super::JsonApiAlert`] during conversion,
    /// so a malformed alert drops only itself and not the whole page.
    #[serde(default)]
    pub alert: Option<serde_json::Value>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiAutomationRelationships {
    #[serde(default)]
    pub created_by: Option<ToOneLinkage>,
    #[serde(default)]
    pub modified_by: Option<ToOneLinkage>,
    #[serde(default)]
    pub notification_channel: Option<ToOneLinkage>,
    #[serde(default)]
    pub analytical_dashboard: Option<ToOneLinkage>,
    #[serde(default)]
    pub export_definitions: Option<ToManyLinkage>,
    #[serde(default)]
    pub recipients: Option<ToManyLinkage>,
}

/// `(type, id)` pointer to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinkage {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToOneLinkage {
    #[serde(default)]
    pub data: Option<ResourceLinkage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToManyLinkage {
    #[serde(default)]
    pub data: Vec<ResourceLinkage>,
}

impl ToOneLinkage {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

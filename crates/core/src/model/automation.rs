//! Automations: persisted alerts and scheduled exports.

use serde::{Deserialize, Serialize};

use super::alert::{AutomationAlert, AutomationState};
use super::export_definition::ExportDefinitionMetadataObject;
use super::objref::ObjRef;
use super::user::{AutomationRecipient, UserIdentifier};

/// Object kind tag carried by every [`AutomationMetadataObject`].
///
/// Serializes as the constant `"automation"`; any other value fails to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutomationKind {
    #[default]
    #[serde(rename = "automation")]
    Automation,
}

/// A persisted automation as the SDK sees it.
///
/// `schedule`, `alert` and `metadata` are omitted from the serialized form
/// when absent, so key presence distinguishes "no schedule" from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationMetadataObject {
    #[serde(rename = "type", default)]
    pub kind: AutomationKind,
    pub id: String,
    #[serde(rename = "ref")]
    pub obj_ref: ObjRef,
    pub uri: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<AutomationAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub export_definitions: Vec<ExportDefinitionMetadataObject>,
    #[serde(default)]
    pub recipients: Vec<AutomationRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
    pub unlisted: bool,
    pub production: bool,
    pub deprecated: bool,
}

/// An automation that has not been saved yet (no identity).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationDefinition {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<AutomationAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub recipients: Vec<AutomationRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
}

/// Access to the alert-related parts of an automation, saved or not.
pub trait AlertAutomation: Clone {
    fn alert(&self) -> Option<&AutomationAlert>;
    fn set_alert(&mut self, alert: AutomationAlert);
    fn title(&self) -> &str;
    fn set_title(&mut self, title: String);
    fn notification_channel(&self) -> Option<&str>;
    fn set_notification_channel(&mut self, channel: String);

    fn is_paused(&self) -> bool {
        self.alert()
            .map(|a| a.trigger.state == AutomationState::Paused)
            .unwrap_or(false)
    }
}

impl AlertAutomation for AutomationMetadataObject {
    fn alert(&self) -> Option<&AutomationAlert> {
        self.alert.as_ref()
    }

    fn set_alert(&mut self, alert: AutomationAlert) {
        self.alert = Some(alert);
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn notification_channel(&self) -> Option<&str> {
        self.notification_channel.as_deref()
    }

    fn set_notification_channel(&mut self, channel: String) {
        self.notification_channel = Some(channel);
    }
}

impl AlertAutomation for AutomationDefinition {
    fn alert(&self) -> Option<&AutomationAlert> {
        self.alert.as_ref()
    }

    fn set_alert(&mut self, alert: AutomationAlert) {
        self.alert = Some(alert);
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn notification_channel(&self) -> Option<&str> {
        self.notification_channel.as_deref()
    }

    fn set_notification_channel(&mut self, channel: String) {
        self.notification_channel = Some(channel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_the_constant_automation() {
        assert_eq!(
            serde_json::to_value(AutomationKind::Automation).unwrap(),
            serde_json::json!("automation")
        );
        assert!(serde_json::from_value::<AutomationKind>(serde_json::json!("insight")).is_err());
    }

    #[test]
    fn kind_defaults_when_absent() {
        let automation: AutomationMetadataObject = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "ref": {"identifier": "a1", "type": "automation"},
            "uri": "a1",
            "title": "",
            "description": "",
            "unlisted": false,
            "production": true,
            "deprecated": false
        }))
        .unwrap();
        assert_eq!(automation.kind, AutomationKind::Automation);
    }
}

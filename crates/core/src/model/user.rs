//! Users referenced by automations: creators, updaters and recipients.

use serde::{Deserialize, Serialize};

use super::objref::ObjRef;

/// A user known by login, optionally enriched with profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentifier {
    #[serde(rename = "ref")]
    pub obj_ref: ObjRef,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipientType {
    User,
}

/// A notification recipient of an automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationRecipient {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AutomationRecipient {
    pub fn user(id: impl Into<String>, name: Option<String>, email: Option<String>) -> Self {
        Self {
            recipient_type: RecipientType::User,
            id: id.into(),
            name,
            email,
        }
    }
}

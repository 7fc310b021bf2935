use serde::{Deserialize, Serialize};

use super::objref::ObjRef;

/// Export definition attached to a scheduled automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDefinitionMetadataObject {
    pub id: String,
    #[serde(rename = "ref")]
    pub obj_ref: ObjRef,
    pub uri: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Export request as sent by the backend, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payload: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub unlisted: bool,
    pub production: bool,
    pub deprecated: bool,
}

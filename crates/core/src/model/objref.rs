//! Object references: identifier refs pointing at workspace objects and
//! local-id refs pointing at items within a single execution definition.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AutomationError;

/// Kinds of workspace objects a reference can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    Measure,
    Fact,
    Attribute,
    DisplayForm,
    DataSet,
    Insight,
    AnalyticalDashboard,
    Automation,
    ExportDefinition,
    NotificationChannel,
    User,
}

impl ObjectType {
    /// Map a backend object type name onto the SDK object type.
    pub fn from_backend(backend_type: &str) -> Result<Self, AutomationError> {
        match backend_type {
            "metric" => Ok(ObjectType::Measure),
            "fact" => Ok(ObjectType::Fact),
            "attribute" => Ok(ObjectType::Attribute),
            "label" => Ok(ObjectType::DisplayForm),
            "dataset" => Ok(ObjectType::DataSet),
            "visualizationObject" => Ok(ObjectType::Insight),
            "analyticalDashboard" => Ok(ObjectType::AnalyticalDashboard),
            "automation" => Ok(ObjectType::Automation),
            "exportDefinition" => Ok(ObjectType::ExportDefinition),
            "notificationChannel" => Ok(ObjectType::NotificationChannel),
            "user" | "userIdentifier" => Ok(ObjectType::User),
            other => Err(AutomationError::UnknownObjectType(other.to_string())),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::Measure => "measure",
            ObjectType::Fact => "fact",
            ObjectType::Attribute => "attribute",
            ObjectType::DisplayForm => "displayForm",
            ObjectType::DataSet => "dataSet",
            ObjectType::Insight => "insight",
            ObjectType::AnalyticalDashboard => "analyticalDashboard",
            ObjectType::Automation => "automation",
            ObjectType::ExportDefinition => "exportDefinition",
            ObjectType::NotificationChannel => "notificationChannel",
            ObjectType::User => "user",
        };
        f.write_str(name)
    }
}

/// Reference by workspace identifier and object type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifierRef {
    pub identifier: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
}

/// Reference by local identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalIdRef {
    #[serde(rename = "localIdentifier")]
    pub local_identifier: String,
}

/// Either kind of object reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjRef {
    Identifier(IdentifierRef),
    LocalId(LocalIdRef),
}

impl ObjRef {
    /// Shorthand for an identifier reference.
    pub fn id(identifier: impl Into<String>, object_type: ObjectType) -> Self {
        ObjRef::Identifier(IdentifierRef {
            identifier: identifier.into(),
            object_type,
        })
    }

    /// Shorthand for a local-id reference.
    pub fn local(local_identifier: impl Into<String>) -> Self {
        ObjRef::LocalId(LocalIdRef {
            local_identifier: local_identifier.into(),
        })
    }

    pub fn local_identifier(&self) -> Option<&str> {
        match self {
            ObjRef::LocalId(r) => Some(&r.local_identifier),
            ObjRef::Identifier(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_types_map_to_sdk_types() {
        assert_eq!(ObjectType::from_backend("metric").unwrap(), ObjectType::Measure);
        assert_eq!(ObjectType::from_backend("label").unwrap(), ObjectType::DisplayForm);
        assert_eq!(ObjectType::from_backend("dataset").unwrap(), ObjectType::DataSet);
        assert!(matches!(
            ObjectType::from_backend("spaceship"),
            Err(AutomationError::UnknownObjectType(t)) if t == "spaceship"
        ));
    }

    #[test]
    fn untagged_refs_deserialize_by_shape() {
        let id: ObjRef =
            serde_json::from_str(r#"{"identifier":"revenue","type":"measure"}"#).unwrap();
        assert_eq!(id, ObjRef::id("revenue", ObjectType::Measure));

        let local: ObjRef = serde_json::from_str(r#"{"localIdentifier":"m1"}"#).unwrap();
        assert_eq!(local.local_identifier(), Some("m1"));
    }
}

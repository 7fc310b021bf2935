//! Side-loaded (`included`) resources and the `(type, id)` index over them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resource kinds automations link to and that this crate resolves.
/// Anything else deserializes as [`JsonApiIncluded::Other`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsonApiIncluded {
    User(JsonApiUserOut),
    UserIdentifier(JsonApiUserIdentifierOut),
    ExportDefinition(JsonApiExportDefinitionOut),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludedType {
    User,
    UserIdentifier,
    ExportDefinition,
}

impl JsonApiIncluded {
    pub fn key(&self) -> Option<(IncludedType, &str)> {
        match self {
            JsonApiIncluded::User(u) => Some((IncludedType::User, u.id.as_str())),
            JsonApiIncluded::UserIdentifier(u) => {
                Some((IncludedType::UserIdentifier, u.id.as_str()))
            }
            JsonApiIncluded::ExportDefinition(e) => {
                Some((IncludedType::ExportDefinition, e.id.as_str()))
            }
            JsonApiIncluded::Other => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiUserOut {
    pub id: String,
    #[serde(default)]
    pub attributes: JsonApiUserAttributes,
}

/// Attribute names follow the backend (`firstname`, not `firstName`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiUserAttributes {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub authentication_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiUserIdentifierOut {
    pub id: String,
    #[serde(default)]
    pub attributes: JsonApiUserAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiExportDefinitionOut {
    pub id: String,
    #[serde(default)]
    pub attributes: JsonApiExportDefinitionAttributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiExportDefinitionAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub request_payload: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

/// Lookup table over `included`, keyed by `(type, id)`.
///
/// Built once per document. When the same key appears more than once the
/// first occurrence wins, matching a linear "find first" scan.
#[derive(Debug, Default)]
pub struct IncludedIndex<'a> {
    by_type: HashMap<IncludedType, HashMap<&'a str, &'a JsonApiIncluded>>,
}

impl<'a> IncludedIndex<'a> {
    pub fn new(included: &'a [JsonApiIncluded]) -> Self {
        let mut by_type: HashMap<IncludedType, HashMap<&'a str, &'a JsonApiIncluded>> =
            HashMap::new();
        for resource in included {
            if let Some((kind, id)) = resource.key() {
                by_type.entry(kind).or_default().entry(id).or_insert(resource);
            }
        }
        Self { by_type }
    }

    /// Number of indexed resources.
    pub fn len(&self) -> usize {
        self.by_type.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, kind: IncludedType, id: &str) -> Option<&'a JsonApiIncluded> {
        self.by_type.get(&kind).and_then(|ids| ids.get(id)).copied()
    }

    pub fn user(&self, id: &str) -> Option<&'a JsonApiUserOut> {
        match self.get(IncludedType::User, id) {
            Some(JsonApiIncluded::User(u)) => Some(u),
            _ => None,
        }
    }

    pub fn user_identifier(&self, id: &str) -> Option<&'a JsonApiUserIdentifierOut> {
        match self.get(IncludedType::UserIdentifier, id) {
            Some(JsonApiIncluded::UserIdentifier(u)) => Some(u),
            _ => None,
        }
    }

    pub fn export_definition(&self, id: &str) -> Option<&'a JsonApiExportDefinitionOut> {
        match self.get(IncludedType::ExportDefinition, id) {
            Some(JsonApiIncluded::ExportDefinition(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn included() -> Vec<JsonApiIncluded> {
        serde_json::from_value(serde_json::json!([
            {"type": "user", "id": "u1", "attributes": {"firstname": "Ada", "lastname": "Lovelace"}},
            {"type": "user", "id": "u1", "attributes": {"firstname": "Shadowed"}},
            {"type": "userIdentifier", "id": "u1", "attributes": {"email": "ada@example.com"}},
            {"type": "notificationChannel", "id": "ch1", "attributes": {"name": "Slack"}},
            {"type": "exportDefinition", "id": "e1", "attributes": {"title": "Weekly"}}
        ]))
        .unwrap()
    }

    #[test]
    fn unknown_resource_types_are_kept_as_other() {
        let included = included();
        assert!(matches!(included[3], JsonApiIncluded::Other));
    }

    #[test]
    fn lookup_matches_type_and_id() {
        let included = included();
        let index = IncludedIndex::new(&included);
        assert_eq!(index.len(), 3);

        assert!(index.user("u1").is_some());
        assert!(index.user_identifier("u1").is_some());
        assert!(index.export_definition("u1").is_none());
        assert!(index.user("e1").is_none());
        assert!(index.user("missing").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        let included = included();
        let index = IncludedIndex::new(&included);
        let user = index.user("u1").unwrap();
        assert_eq!(user.attributes.firstname.as_deref(), Some("Ada"));
    }
}

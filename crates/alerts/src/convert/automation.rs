//! Automation resources to [`AutomationMetadataObject`].

use tracing::debug;

use automation_core::{AutomationKind, AutomationMetadataObject, ObjRef, ObjectType};

use crate::jsonapi::{
    IncludedIndex, JsonApiAutomationOutList, JsonApiAutomationOutWithLinks, JsonApiIncluded,
};

use super::alert::convert_alert;
use super::export_definition::convert_export_definition;
use super::user::{convert_recipient, convert_user_identifier};

/// Convert one automation, resolving relationships against `included`.
///
/// Never fails: unresolved relationships are dropped or passed through
/// bare, and an alert that cannot be represented is omitted.
pub fn convert_automation(
    automation: &JsonApiAutomationOutWithLinks,
    included: &[JsonApiIncluded],
) -> AutomationMetadataObject {
    convert_automation_indexed(automation, &IncludedIndex::new(included))
}

/// Convert every automation of a list document, in order, sharing the
/// document's `included` resources.
pub fn convert_automation_list_to_automations(
    list: &JsonApiAutomationOutList,
) -> Vec<AutomationMetadataObject> {
    let included = list.included.as_deref().unwrap_or_default();
    let index = IncludedIndex::new(included);
    list.data
        .iter()
        .map(|automation| convert_automation_indexed(automation, &index))
        .collect()
}

/// [`convert_automation`] against a prebuilt index.
pub fn convert_automation_indexed(
    automation: &JsonApiAutomationOutWithLinks,
    included: &IncludedIndex<'_>,
) -> AutomationMetadataObject {
    let id = automation.id.clone();
    let attributes = &automation.attributes;
    let relationships = &automation.relationships;

    let export_definitions = relationships
        .export_definitions
        .iter()
        .flat_map(|rel| rel.data.iter())
        .filter_map(|linkage| {
            let resolved = included.export_definition(&linkage.id);
            if resolved.is_none() {
                debug!(automation = %id, export_definition = %linkage.id, "export definition not found in included, dropping");
            }
            resolved
        })
        .map(convert_export_definition)
        .collect();

    let recipients = relationships
        .recipients
        .iter()
        .flat_map(|rel| rel.data.iter())
        .filter_map(|linkage| convert_recipient(linkage, included))
        .collect();

    AutomationMetadataObject {
        kind: AutomationKind::Automation,
        obj_ref: ObjRef::id(id.clone(), ObjectType::Automation),
        uri: id.clone(),
        title: attributes.title.clone().unwrap_or_default(),
        description: attributes.description.clone().unwrap_or_default(),
        tags: attributes.tags.clone(),
        schedule: attributes.schedule.clone(),
        alert: convert_alert(attributes.alert.as_ref(), attributes.state.as_deref()),
        metadata: attributes.metadata.clone(),
        details: attributes.details.clone(),
        export_definitions,
        recipients,
        notification_channel: relationships
            .notification_channel
            .as_ref()
            .and_then(|rel| rel.id())
            .map(str::to_string),
        created_by: convert_user_identifier(relationships.created_by.as_ref(), included),
        updated_by: convert_user_identifier(relationships.modified_by.as_ref(), included),
        created: attributes.created_at.clone(),
        updated: attributes.modified_at.clone(),
        dashboard: relationships
            .analytical_dashboard
            .as_ref()
            .and_then(|rel| rel.id())
            .map(str::to_string),
        unlisted: false,
        production: true,
        deprecated: false,
        id,
    }
}

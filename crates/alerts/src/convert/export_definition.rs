use automation_core::{ExportDefinitionMetadataObject, ObjRef, ObjectType};

use crate::jsonapi::JsonApiExportDefinitionOut;

/// Convert a side-loaded export definition resource.
pub fn convert_export_definition(
    export_definition: &JsonApiExportDefinitionOut,
) -> ExportDefinitionMetadataObject {
    let attributes = &export_definition.attributes;
    ExportDefinitionMetadataObject {
        id: export_definition.id.clone(),
        obj_ref: ObjRef::id(export_definition.id.clone(), ObjectType::ExportDefinition),
        uri: export_definition.id.clone(),
        title: attributes.title.clone().unwrap_or_default(),
        description: attributes.description.clone().unwrap_or_default(),
        tags: attributes.tags.clone(),
        request_payload: attributes.request_payload.clone(),
        created: attributes.created_at.clone(),
        updated: attributes.modified_at.clone(),
        unlisted: false,
        production: true,
        deprecated: false,
    }
}

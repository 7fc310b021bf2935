//! Users linked from automations: recipients and creator/updater.

use tracing::debug;

use automation_core::{AutomationRecipient, ObjRef, ObjectType, UserIdentifier};

use crate::jsonapi::{IncludedIndex, ResourceLinkage, ToOneLinkage};

/// Resolve a recipient linkage to a user recipient.
///
/// Returns `None` when no `user` with that id is side-loaded. The display
/// name is only set when both first and last name are known.
pub fn convert_recipient(
    linkage: &ResourceLinkage,
    included: &IncludedIndex<'_>,
) -> Option<AutomationRecipient> {
    let Some(user) = included.user(&linkage.id) else {
        debug!(recipient = %linkage.id, "recipient not found in included, dropping");
        return None;
    };

    let name = match (&user.attributes.firstname, &user.attributes.lastname) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            Some(format!("{} {}", first, last))
        }
        _ => None,
    };

    Some(AutomationRecipient::user(
        user.id.clone(),
        name,
        user.attributes.email.clone(),
    ))
}

/// Resolve a creator/updater linkage.
///
/// Absent linkage gives `None`. A linkage that cannot be resolved still
/// yields an identifier carrying only the login.
pub fn convert_user_identifier(
    linkage: Option<&ToOneLinkage>,
    included: &IncludedIndex<'_>,
) -> Option<UserIdentifier> {
    let id = linkage?.id()?;
    let user = included.user_identifier(id);
    if user.is_none() {
        debug!(user = %id, "user identifier not found in included");
    }

    Some(UserIdentifier {
        obj_ref: ObjRef::id(id, ObjectType::User),
        login: id.to_string(),
        first_name: user.and_then(|u| u.attributes.firstname.clone()),
        last_name: user.and_then(|u| u.attributes.lastname.clone()),
        email: user.and_then(|u| u.attributes.email.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::JsonApiIncluded;

    fn included() -> Vec<JsonApiIncluded> {
        serde_json::from_value(serde_json::json!([
            {"type": "user", "id": "full", "attributes": {"firstname": "Ada", "lastname": "Lovelace", "email": "ada@example.com"}},
            {"type": "user", "id": "partial", "attributes": {"firstname": "Grace", "email": "grace@example.com"}},
            {"type": "userIdentifier", "id": "admin", "attributes": {"firstname": "Alan", "lastname": "Turing"}}
        ]))
        .unwrap()
    }

    fn linkage(id: &str, resource_type: &str) -> ResourceLinkage {
        ResourceLinkage {
            id: id.to_string(),
            resource_type: resource_type.to_string(),
        }
    }

    #[test]
    fn recipient_name_requires_both_parts() {
        let included = included();
        let index = IncludedIndex::new(&included);

        let full = convert_recipient(&linkage("full", "user"), &index).unwrap();
        assert_eq!(full.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(full.email.as_deref(), Some("ada@example.com"));

        let partial = convert_recipient(&linkage("partial", "user"), &index).unwrap();
        assert_eq!(partial.name, None);
        assert_eq!(partial.email.as_deref(), Some("grace@example.com"));
    }

    #[test]
    fn unresolved_recipient_is_dropped() {
        let included = included();
        let index = IncludedIndex::new(&included);
        assert!(convert_recipient(&linkage("nobody", "user"), &index).is_none());
        // userIdentifier resources are not recipients
        assert!(convert_recipient(&linkage("admin", "user"), &index).is_none());
    }

    #[test]
    fn user_identifier_is_best_effort() {
        let included = included();
        let index = IncludedIndex::new(&included);

        assert!(convert_user_identifier(None, &index).is_none());
        assert!(convert_user_identifier(Some(&ToOneLinkage { data: None }), &index).is_none());

        let known = ToOneLinkage {
            data: Some(linkage("admin", "userIdentifier")),
        };
        let admin = convert_user_identifier(Some(&known), &index).unwrap();
        assert_eq!(admin.login, "admin");
        assert_eq!(admin.first_name.as_deref(), Some("Alan"));

        let unknown = ToOneLinkage {
            data: Some(linkage("ghost", "userIdentifier")),
        };
        let ghost = convert_user_identifier(Some(&unknown), &index).unwrap();
        assert_eq!(ghost.login, "ghost");
        assert_eq!(ghost.obj_ref, ObjRef::id("ghost", ObjectType::User));
        assert!(ghost.first_name.is_none() && ghost.email.is_none());
    }
}

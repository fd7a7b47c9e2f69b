//! Client models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartera_core::{ClientId, PortalCredentials};

use super::contact::{Contact, NewContact};

/// A client row as served by the API.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Advisory flag: gates credential display in the UI, nothing else.
    pub has_portal: bool,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub portal: PortalCredentials,
    pub created_at: DateTime<Utc>,
}

/// A client row in the dashboard list, annotated with its contact count.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: ClientId,
    pub name: String,
    pub has_portal: bool,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub portal: PortalCredentials,
    pub created_at: DateTime<Utc>,
    pub contact_count: i64,
}

/// A client with its contacts, as served by the detail endpoint.
///
/// Contacts are ordered newest-first (`createdAt` descending).
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Client,
    pub contacts: Vec<Contact>,
}

/// Payload for `POST /api/clients`.
///
/// `name` is optional at the serde level so its absence surfaces as a 400
/// from the handler rather than a body-rejection; everything else defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: Option<String>,
    #[serde(default)]
    pub has_portal: bool,
    #[serde(flatten)]
    pub portal: PortalCredentials,
    #[serde(default)]
    pub contacts: Vec<NewContact>,
}

/// Payload for `PUT /api/clients/:id`.
///
/// PUT is full-replace: omitted portal fields become NULL and an omitted
/// `hasPortal` becomes false. `name` is the one exception - it is NOT NULL
/// in the schema, so an omitted name leaves the stored name unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub name: Option<String>,
    #[serde(default)]
    pub has_portal: bool,
    #[serde(flatten)]
    pub portal: PortalCredentials,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn client_serializes_with_legacy_field_names() {
        let client = Client {
            id: ClientId::new(3),
            name: "Acme".to_owned(),
            has_portal: true,
            portal: PortalCredentials::new(
                Some("https://portal.acme.example".to_owned()),
                Some("acme-user".to_owned()),
                Some("s3cret".to_owned()),
            ),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["hasPortal"], true);
        assert_eq!(json["portalUrl"], "https://portal.acme.example");
        assert_eq!(json["portalUser"], "acme-user");
        assert_eq!(json["portalPass"], "s3cret");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn summary_exposes_contact_count() {
        let summary = ClientSummary {
            id: ClientId::new(1),
            name: "Acme".to_owned(),
            has_portal: false,
            portal: PortalCredentials::default(),
            created_at: Utc::now(),
            contact_count: 4,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["contactCount"], 4);
    }

    #[test]
    fn new_client_defaults_everything_but_name() {
        let payload: NewClient = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Acme"));
        assert!(!payload.has_portal);
        assert!(payload.portal.is_empty());
        assert!(payload.contacts.is_empty());
    }

    #[test]
    fn new_client_accepts_nested_contacts() {
        let payload: NewClient = serde_json::from_str(
            r#"{"name":"Acme","contacts":[{"name":"Ana","email":"ana@acme.example"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.contacts.len(), 1);
        assert_eq!(payload.contacts[0].name.as_deref(), Some("Ana"));
    }

    #[test]
    fn update_treats_omitted_portal_fields_as_cleared() {
        let payload: ClientUpdate = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert!(!payload.has_portal);
        assert!(payload.portal.is_empty());
    }

    #[test]
    fn update_without_name_deserializes() {
        let payload: ClientUpdate =
            serde_json::from_str(r#"{"hasPortal":true,"portalUrl":"https://x"}"#).unwrap();
        assert!(payload.name.is_none());
        assert!(payload.has_portal);
        assert_eq!(payload.portal.portal_url.as_deref(), Some("https://x"));
    }
}

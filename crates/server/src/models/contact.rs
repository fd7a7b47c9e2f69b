//! Contact models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartera_core::{ClientId, ContactId};

/// A contact row as served by the API.
///
/// The legacy per-contact portal columns are deliberately not mapped here;
/// they exist only for `cartera-cli backfill-portal`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub client_id: ClientId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/clients/:id/contacts` and nested client creation.
///
/// Every field is optional; the legacy UI submits empty strings for blank
/// inputs and those are stored as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
}

/// Payload for `PUT /api/contacts/:id`. Full-replace of every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_client_id_in_camel_case() {
        let contact = Contact {
            id: ContactId::new(9),
            client_id: ClientId::new(3),
            name: Some("Ana".to_owned()),
            email: None,
            department: Some("Ventas".to_owned()),
            phone: None,
            observations: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["clientId"], 3);
        assert_eq!(json["department"], "Ventas");
        assert!(json["email"].is_null());
    }

    #[test]
    fn update_ignores_extra_client_id_key() {
        // The legacy front end sends clientId in the PUT body; ownership
        // never changes, so the key is ignored.
        let payload: ContactUpdate =
            serde_json::from_str(r#"{"clientId":3,"name":"Ana","phone":"+34 600"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ana"));
        assert_eq!(payload.phone.as_deref(), Some("+34 600"));
        assert!(payload.email.is_none());
    }
}

//! HTTP route handlers for the directory API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/clients               - List clients with contact counts
//! POST   /api/clients               - Create client (+ optional nested contacts)
//! GET    /api/clients/{id}          - Client with contacts (newest first)
//! PUT    /api/clients/{id}          - Replace client fields
//! DELETE /api/clients/{id}          - Delete client (cascades contacts)
//! POST   /api/clients/{id}/contacts - Add contact to a client
//! PUT    /api/contacts/{id}         - Replace contact fields
//! DELETE /api/contacts/{id}         - Delete contact
//! GET    /api/suppliers             - List suppliers
//! POST   /api/suppliers             - Create supplier
//! GET    /api/suppliers/{id}        - One supplier
//! PUT    /api/suppliers/{id}        - Replace supplier fields
//! DELETE /api/suppliers/{id}        - Delete supplier
//! ```

pub mod clients;
pub mod contacts;
pub mod suppliers;

use axum::{
    Router,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::{get, post, put},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Confirmation body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Path extractor for entity ids.
///
/// Malformed ids fail with the generic 500 envelope, not a 400: the API this
/// service replaced ran ids through an unchecked parse straight into the
/// database layer, and callers see that as a server error.
pub struct PathId<T>(pub T);

impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: From<i32> + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Self(T::from(parse_path_id(&raw)?)))
    }
}

pub(crate) fn parse_path_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::Internal(format!("invalid id in path: {raw}")))
}

/// Create the client routes router.
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::detail)
                .put(clients::update)
                .delete(clients::delete),
        )
        .route("/{id}/contacts", post(contacts::create))
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/{id}", put(contacts::update).delete(contacts::delete))
}

/// Create the supplier routes router.
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(suppliers::list).post(suppliers::create))
        .route(
            "/{id}",
            get(suppliers::detail)
                .put(suppliers::update)
                .delete(suppliers::delete),
        )
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/clients", client_routes())
        .nest("/api/contacts", contact_routes())
        .nest("/api/suppliers", supplier_routes())
}

/// Validate a required `name` field from a create payload.
///
/// The legacy API rejected both absent and empty names; whitespace-only
/// names count as empty. Returns the trimmed name.
pub(crate) fn required_name(name: Option<&str>) -> Result<&str, AppError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(AppError::BadRequest("name is required".to_owned())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn path_id_parses_plain_integers() {
        assert_eq!(parse_path_id("42").unwrap(), 42);
    }

    #[test]
    fn malformed_path_id_maps_to_generic_500() {
        let err = parse_path_id("abc").unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn required_name_accepts_and_trims() {
        assert_eq!(required_name(Some("  Acme  ")).unwrap(), "Acme");
    }

    #[test]
    fn required_name_rejects_absent() {
        assert!(required_name(None).is_err());
    }

    #[test]
    fn required_name_rejects_empty_and_blank() {
        assert!(required_name(Some("")).is_err());
        assert!(required_name(Some("   ")).is_err());
    }
}

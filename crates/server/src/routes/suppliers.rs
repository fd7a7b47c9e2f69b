//! Supplier route handlers.

use axum::{Json, extract::State};

use cartera_core::SupplierId;

use super::{DeleteResponse, PathId, required_name};
use crate::db::SupplierRepository;
use crate::error::AppError;
use crate::models::{NewSupplier, Supplier, SupplierUpdate};
use crate::state::AppState;

/// `GET /api/suppliers` - list all suppliers in name order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>, AppError> {
    let suppliers = SupplierRepository::new(state.pool()).list().await?;
    Ok(Json(suppliers))
}

/// `POST /api/suppliers` - create a supplier.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewSupplier>,
) -> Result<Json<Supplier>, AppError> {
    let name = required_name(payload.name.as_deref())?.to_owned();

    let created = SupplierRepository::new(state.pool())
        .create(&payload, &name)
        .await?;

    tracing::info!(supplier_id = %created.id, "supplier created");
    Ok(Json(created))
}

/// `GET /api/suppliers/{id}` - one supplier.
pub async fn detail(
    State(state): State<AppState>,
    PathId(id): PathId<SupplierId>,
) -> Result<Json<Supplier>, AppError> {
    let supplier = SupplierRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Supplier"))?;

    Ok(Json(supplier))
}

/// `PUT /api/suppliers/{id}` - replace the supplier's mutable fields.
///
/// A missing row is a server error, not a 404.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<SupplierId>,
    Json(payload): Json<SupplierUpdate>,
) -> Result<Json<Supplier>, AppError> {
    let updated = SupplierRepository::new(state.pool())
        .update(id, &payload)
        .await?;

    Ok(Json(updated))
}

/// `DELETE /api/suppliers/{id}` - delete a supplier.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<SupplierId>,
) -> Result<Json<DeleteResponse>, AppError> {
    SupplierRepository::new(state.pool()).delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Supplier deleted",
    }))
}

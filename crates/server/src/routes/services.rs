use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use common::types::{Created, Detail};
use models::service::{self as entity, ServiceFields};
use service::services;

use crate::errors::JsonApiError;
use crate::extract::{EntityId, ValidJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ServicePayload {
    pub name: String,
    pub description: String,
}

impl ServicePayload {
    fn into_fields(self) -> ServiceFields {
        ServiceFields::new(self.name, self.description)
    }
}

#[utoipa::path(
    get, path = "/services/", tag = "services",
    responses(
        (status = 200, description = "All services", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<entity::Model>>, JsonApiError> {
    let rows = services::list_services(&state.db).await?;
    info!(count = rows.len(), "list services");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<entity::Model>, JsonApiError> {
    Ok(Json(services::get_service(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/services/", tag = "services",
    request_body = ServicePayload,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ServicePayload>,
) -> Result<Json<Created>, JsonApiError> {
    let id = services::create_service(&state.db, payload.into_fields()).await?;
    info!(id, "created service");
    Ok(Json(Created::new(entity::CREATED, id)))
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    request_body = ServicePayload,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(payload): ValidJson<ServicePayload>,
) -> Result<Json<Detail>, JsonApiError> {
    services::update_service(&state.db, id, payload.into_fields()).await?;
    info!(id, "updated service");
    Ok(Json(Detail::new(entity::UPDATED)))
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Detail>, JsonApiError> {
    services::delete_service(&state.db, id).await?;
    info!(id, "deleted service");
    Ok(Json(Detail::new(entity::DELETED)))
}

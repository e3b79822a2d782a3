use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use common::types::{Created, Detail};
use models::cake::{self, CakeFields};
use service::cakes;

use crate::errors::JsonApiError;
use crate::extract::{EntityId, ValidJson};
use crate::state::AppState;

/// Body of create and update. A client-sent `id` is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CakePayload {
    pub name: String,
    pub description: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl CakePayload {
    fn into_fields(self) -> Result<CakeFields, JsonApiError> {
        Ok(CakeFields::new(self.name, self.description, self.price)?)
    }
}

#[utoipa::path(
    get, path = "/cakes/", tag = "cakes",
    responses(
        (status = 200, description = "All cakes", body = [crate::openapi::CakeDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<cake::Model>>, JsonApiError> {
    let rows = cakes::list_cakes(&state.db).await?;
    info!(count = rows.len(), "list cakes");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/cakes/{id}", tag = "cakes",
    params(("id" = i32, Path, description = "Cake id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CakeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<cake::Model>, JsonApiError> {
    Ok(Json(cakes::get_cake(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/cakes/", tag = "cakes",
    request_body = CakePayload,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CakePayload>,
) -> Result<Json<Created>, JsonApiError> {
    let id = cakes::create_cake(&state.db, payload.into_fields()?).await?;
    info!(id, "created cake");
    Ok(Json(Created::new(cake::CREATED, id)))
}

#[utoipa::path(
    put, path = "/cakes/{id}", tag = "cakes",
    params(("id" = i32, Path, description = "Cake id")),
    request_body = CakePayload,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(payload): ValidJson<CakePayload>,
) -> Result<Json<Detail>, JsonApiError> {
    cakes::update_cake(&state.db, id, payload.into_fields()?).await?;
    info!(id, "updated cake");
    Ok(Json(Detail::new(cake::UPDATED)))
}

#[utoipa::path(
    delete, path = "/cakes/{id}", tag = "cakes",
    params(("id" = i32, Path, description = "Cake id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Detail>, JsonApiError> {
    cakes::delete_cake(&state.db, id).await?;
    info!(id, "deleted cake");
    Ok(Json(Detail::new(cake::DELETED)))
}

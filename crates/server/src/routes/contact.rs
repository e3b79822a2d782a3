use axum::{extract::State, Json};

use common::types::Contact;

use crate::state::AppState;

#[utoipa::path(get, path = "/contact/", tag = "contact", responses((status = 200, description = "Contact card", body = crate::openapi::ContactDoc)))]
pub async fn get(State(state): State<AppState>) -> Json<Contact> {
    Json((*state.contact).clone())
}

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Welcome};

use crate::{metrics, openapi::ApiDoc, state::AppState};

pub mod cakes;
pub mod contact;
pub mod services;

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, description = "Greeting", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Welcome> {
    Json(Welcome::default())
}

#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_text() -> impl IntoResponse {
    let (status, body) = common::metrics::encode_metrics();
    (status, [(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Build the full application router over an already connected state.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let meta = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/openapi.json", get(openapi_json));

    let cake_routes = Router::new()
        .route("/cakes/", get(cakes::list).post(cakes::create))
        .route("/cakes", get(cakes::list).post(cakes::create))
        .route("/cakes/:id", get(cakes::get).put(cakes::update).delete(cakes::delete));

    let service_routes = Router::new()
        .route("/services/", get(services::list).post(services::create))
        .route("/services", get(services::list).post(services::create))
        .route("/services/:id", get(services::get).put(services::update).delete(services::delete));

    let contact_routes = Router::new()
        .route("/contact/", get(contact::get))
        .route("/contact", get(contact::get));

    meta.merge(cake_routes)
        .merge(service_routes)
        .merge(contact_routes)
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

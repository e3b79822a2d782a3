use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{cakes::CakePayload, services::ServicePayload};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CakeDoc { pub id: i32, pub name: String, pub description: String, pub price: f64 }

#[derive(ToSchema)]
pub struct ServiceDoc { pub id: i32, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(ToSchema)]
pub struct CreatedDoc { pub detail: String, pub id: i32 }

#[derive(ToSchema)]
pub struct ContactDoc { pub address: String, pub phone: String, pub email: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::cakes::list,
        crate::routes::cakes::get,
        crate::routes::cakes::create,
        crate::routes::cakes::update,
        crate::routes::cakes::delete,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::contact::get,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CakeDoc,
            ServiceDoc,
            DetailDoc,
            CreatedDoc,
            ContactDoc,
            ErrorDoc,
            CakePayload,
            ServicePayload,
        )
    ),
    tags(
        (name = "meta"),
        (name = "cakes"),
        (name = "services"),
        (name = "contact")
    )
)]
pub struct ApiDoc;

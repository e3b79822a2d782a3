use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use models::service::{self, ServiceFields};
use crate::errors::ServiceError;

pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, ServiceError> {
    service::Entity::find()
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::store("list_services", e))
}

pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<service::Model, ServiceError> {
    service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::store("get_service", e))?
        .ok_or_else(|| ServiceError::not_found(service::NOT_FOUND))
}

pub async fn create_service(db: &DatabaseConnection, input: ServiceFields) -> Result<i32, ServiceError> {
    let am = service::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        ..Default::default()
    };
    let res = service::Entity::insert(am)
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("create_service", e))?;
    debug!(id = res.last_insert_id, "service inserted");
    Ok(res.last_insert_id)
}

/// Replace name and description; `NotFound` when no row has `id`.
pub async fn update_service(db: &DatabaseConnection, id: i32, input: ServiceFields) -> Result<(), ServiceError> {
    let res = service::Entity::update_many()
        .col_expr(service::Column::Name, Expr::value(input.name))
        .col_expr(service::Column::Description, Expr::value(input.description))
        .filter(service::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("update_service", e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(service::NOT_FOUND));
    }
    Ok(())
}

pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = service::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("delete_service", e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(service::NOT_FOUND));
    }
    Ok(())
}

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, instrument};

use models::cake::{self, CakeFields};
use crate::errors::ServiceError;

/// List every cake, ordered by id.
pub async fn list_cakes(db: &DatabaseConnection) -> Result<Vec<cake::Model>, ServiceError> {
    cake::Entity::find()
        .order_by_asc(cake::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::store("list_cakes", e))
}

/// Get a cake by id.
pub async fn get_cake(db: &DatabaseConnection, id: i32) -> Result<cake::Model, ServiceError> {
    cake::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::store("get_cake", e))?
        .ok_or_else(|| ServiceError::not_found(cake::NOT_FOUND))
}

/// Insert a cake and return the id the store assigned to it.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_cake(db: &DatabaseConnection, input: CakeFields) -> Result<i32, ServiceError> {
    let am = cake::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        ..Default::default()
    };
    let res = cake::Entity::insert(am)
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("create_cake", e))?;
    debug!(id = res.last_insert_id, "cake inserted");
    Ok(res.last_insert_id)
}

/// Replace every mutable column of a cake in one statement.
pub async fn update_cake(db: &DatabaseConnection, id: i32, input: CakeFields) -> Result<(), ServiceError> {
    let res = cake::Entity::update_many()
        .col_expr(cake::Column::Name, Expr::value(input.name))
        .col_expr(cake::Column::Description, Expr::value(input.description))
        .col_expr(cake::Column::Price, Expr::value(input.price))
        .filter(cake::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("update_cake", e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(cake::NOT_FOUND));
    }
    Ok(())
}

/// Delete a cake.
pub async fn delete_cake(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = cake::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::store("delete_cake", e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(cake::NOT_FOUND));
    }
    Ok(())
}

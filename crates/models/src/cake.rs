use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const CREATED: &str = "Торт успешно добавлен";
pub const UPDATED: &str = "Торт успешно обновлен";
pub const DELETED: &str = "Торт успешно удален";
pub const NOT_FOUND: &str = "Торт не найден";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cakes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    /// `numeric` in the store, a plain JSON number on the wire.
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every mutable column of a cake, already validated. Used for create and
/// full-replace update alike.
#[derive(Clone, Debug, PartialEq)]
pub struct CakeFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl CakeFields {
    pub fn new(name: String, description: String, price: Decimal) -> Result<Self, ModelError> {
        validate_price(price)?;
        Ok(Self { name, description, price })
    }
}

pub fn validate_price(price: Decimal) -> Result<(), ModelError> {
    if price < Decimal::ZERO {
        return Err(ModelError::Validation("price must not be negative".into()));
    }
    Ok(())
}

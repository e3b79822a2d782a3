use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const CREATED: &str = "Услуга успешно добавлена";
pub const UPDATED: &str = "Услуга успешно обновлена";
pub const DELETED: &str = "Услуга успешно удалена";
pub const NOT_FOUND: &str = "Услуга не найдена";

/// A service the bakery offers (delivery, custom decoration, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceFields {
    pub name: String,
    pub description: String,
}

impl ServiceFields {
    pub fn new(name: String, description: String) -> Self {
        Self { name, description }
    }
}

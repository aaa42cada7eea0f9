use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier entity
///
/// Suppliers are written by the seed binary only; no HTTP operation updates
/// or deletes them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Supplier name, unique across suppliers
    #[sea_orm(unique)]
    pub name: String,

    /// Informational lead time; read by no operation
    pub lead_time_days: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

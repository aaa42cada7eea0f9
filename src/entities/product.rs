use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// SKU (Stock Keeping Unit), unique across products
    #[sea_orm(unique)]
    pub sku: String,

    /// Product name
    pub name: String,

    /// On-hand stock; mutated only by the reorder operation
    pub current_stock: i32,

    /// Restocking threshold; stored but not evaluated by any operation
    pub reorder_point: i32,

    /// Cost per unit
    pub unit_cost: f64,

    /// Weak reference to the supplying vendor; lookup only, no cascade
    pub supplier_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

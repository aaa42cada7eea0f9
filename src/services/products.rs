use crate::{
    db::DbPool,
    entities::{
        product::{self, Column as ProductColumn, Entity as Product},
        supplier::Entity as Supplier,
    },
    errors::ServiceError,
};
use sea_orm::{
    error::SqlErr, sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Input for creating a product
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub sku: String,
    pub name: String,
    pub current_stock: i32,
    pub reorder_point: i32,
    pub unit_cost: f64,
    pub supplier_id: Option<i32>,
}

/// Service for managing products and their stock levels
pub struct ProductService {
    db_pool: Arc<DbPool>,
}

impl ProductService {
    /// Creates a new product service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// List every product in inventory, in storage order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        let db = &*self.db_pool;

        let products = Product::find().all(db).await?;

        Ok(products)
    }

    /// Create a new product and return the stored record with its assigned id
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<product::Model, ServiceError> {
        let db = &*self.db_pool;

        // Reject duplicate SKUs up front with a caller-visible conflict
        let existing = Product::find()
            .filter(ProductColumn::Sku.eq(&input.sku))
            .one(db)
            .await?;
        if existing.is_some() {
            let msg = format!("Product with SKU '{}' already exists", input.sku);
            warn!(%msg);
            return Err(ServiceError::Conflict(msg));
        }

        // The schema carries an FK constraint too; checking here turns a
        // driver-specific failure into a clear validation error.
        if let Some(supplier_id) = input.supplier_id {
            let supplier = Supplier::find_by_id(supplier_id).one(db).await?;
            if supplier.is_none() {
                let msg = format!("Supplier with ID {} does not exist", supplier_id);
                warn!(%msg);
                return Err(ServiceError::ValidationError(msg));
            }
        }

        let sku = input.sku.clone();
        let active = product::ActiveModel {
            sku: Set(input.sku),
            name: Set(input.name),
            current_stock: Set(input.current_stock),
            reorder_point: Set(input.reorder_point),
            unit_cost: Set(input.unit_cost),
            supplier_id: Set(input.supplier_id),
            ..Default::default()
        };

        // A concurrent insert can still win the race past the pre-check, so
        // map the unique violation from the storage layer as well.
        let created = active.insert(db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                ServiceError::Conflict(format!("Product with SKU '{}' already exists", sku))
            } else {
                ServiceError::DatabaseError(e)
            }
        })?;

        info!(product_id = created.id, sku = %created.sku, "Product created successfully");

        Ok(created)
    }

    /// Delete a product by id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = Product::delete_by_id(product_id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Product with ID {} not found",
                product_id
            )));
        }

        info!(product_id, "Product deleted successfully");

        Ok(())
    }

    /// Add `quantity` to a product's stock and return the new level.
    ///
    /// The increment happens in a single UPDATE at the storage layer, so
    /// concurrent adjustments to the same row serialize there instead of
    /// racing through a read-modify-write. The delta is unbounded in sign.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, product_id: i32, quantity: i32) -> Result<i32, ServiceError> {
        let db = &*self.db_pool;

        let result = Product::update_many()
            .col_expr(
                ProductColumn::CurrentStock,
                Expr::col(ProductColumn::CurrentStock).add(quantity),
            )
            .filter(ProductColumn::Id.eq(product_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Product with ID {} not found",
                product_id
            )));
        }

        let updated = Product::find_by_id(product_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Product with ID {} not found", product_id))
            })?;

        info!(
            product_id,
            quantity,
            new_stock = updated.current_stock,
            "Stock adjusted"
        );

        Ok(updated.current_stock)
    }
}

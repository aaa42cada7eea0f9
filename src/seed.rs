//! Demo data for manual testing: one supplier and two fabric products.
//! Invoked by the `seed-data` binary, never by the server process.

use crate::entities::{product, supplier};
use crate::errors::ServiceError;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::info;

/// Insert the sample supplier and products.
///
/// Plain inserts: re-running against an already-seeded database fails on the
/// supplier's unique name rather than duplicating rows.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), ServiceError> {
    let supplier = supplier::ActiveModel {
        name: Set("Global Fabrics Inc".to_string()),
        lead_time_days: Set(14),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(supplier_id = supplier.id, "Created supplier {}", supplier.name);

    let products = [
        ("COT-BLU-001", "Blue Cotton Roll", 100, 40, 12.50),
        // Below its reorder point on purpose, for demoing the dashboard
        ("SILK-RED-002", "Red Silk Sheet", 15, 20, 25.00),
    ];

    for (sku, name, current_stock, reorder_point, unit_cost) in products {
        let model = product::ActiveModel {
            sku: Set(sku.to_string()),
            name: Set(name.to_string()),
            current_stock: Set(current_stock),
            reorder_point: Set(reorder_point),
            unit_cost: Set(unit_cost),
            supplier_id: Set(Some(supplier.id)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        info!(product_id = model.id, sku = %model.sku, "Created product {}", model.name);
    }

    Ok(())
}

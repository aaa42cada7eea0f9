use super::common::{created_response, map_service_error, success_response, validate_input};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::products::CreateProductInput,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

// Request and response DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "SKU must be between 1 and 100 characters"
    ))]
    pub sku: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Product name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub current_stock: i32,
    pub reorder_point: i32,
    pub unit_cost: f64,
    pub supplier_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReorderResponse {
    pub message: String,
    pub new_stock: i32,
}

// Handler functions

/// List all products in inventory
#[utoipa::path(
    get,
    path = "/inventory",
    responses(
        (status = 200, description = "All products in inventory"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .products
        .list_products()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Invalid payload or unknown supplier", body = crate::errors::ErrorResponse),
        (status = 409, description = "SKU already exists", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product = state
        .services
        .products
        .create_product(CreateProductInput {
            sku: payload.sku,
            name: payload.name,
            current_stock: payload.current_stock,
            reorder_point: payload.reorder_point,
            unit_cost: payload.unit_cost,
            supplier_id: payload.supplier_id,
        })
        .await
        .map_err(map_service_error)?;

    info!("Product created: {}", product.id);

    Ok(created_response(product))
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Id of the product to delete")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_product(product_id)
        .await
        .map_err(map_service_error)?;

    info!("Product deleted: {}", product_id);

    Ok(success_response(json!({ "message": "Deleted" })))
}

/// Add a quantity to a product's stock level
#[utoipa::path(
    post,
    path = "/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Stock adjusted", body = ReorderResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn reorder_stock(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_stock = state
        .services
        .products
        .adjust_stock(payload.product_id, payload.quantity)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ReorderResponse {
        message: format!("Successfully ordered {} units.", payload.quantity),
        new_stock,
    }))
}

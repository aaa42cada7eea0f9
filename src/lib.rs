//! Supply Chain API Library
//!
//! This crate provides the core functionality for the supply chain inventory API
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod migrator;
pub mod openapi;
pub mod seed;
pub mod services;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// Service status banner served at the root path
async fn root_status() -> Json<Value> {
    Json(json!({ "status": "Supply Chain API is Online" }))
}

/// Build the inventory API router (root status plus CRUD endpoints)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/inventory", get(handlers::products::list_inventory))
        .route("/products", post(handlers::products::create_product))
        .route(
            "/products/:product_id",
            delete(handlers::products::delete_product),
        )
        .route("/reorder", post(handlers::products::reorder_stock))
}

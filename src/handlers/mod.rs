pub mod common;
pub mod products;

use crate::{db::DbPool, services::products::ProductService};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<ProductService>,
}

impl AppServices {
    /// Build the AppServices container over a shared connection pool.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            products: Arc::new(ProductService::new(db_pool)),
        }
    }
}

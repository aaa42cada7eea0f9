use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supply Chain API",
        version = "0.1.0",
        description = "Inventory tracking backend: list products, create and delete products, and adjust stock levels on reorder.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "inventory", description = "Inventory listing and stock adjustment"),
        (name = "products", description = "Product catalog management")
    ),
    paths(
        crate::handlers::products::list_inventory,
        crate::handlers::products::create_product,
        crate::handlers::products::delete_product,
        crate::handlers::products::reorder_stock,
    ),
    components(
        schemas(
            crate::handlers::products::CreateProductRequest,
            crate::handlers::products::ReorderRequest,
            crate::handlers::products::ReorderResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_every_endpoint() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("Supply Chain API"));
        assert!(json.contains("/inventory"));
        assert!(json.contains("/products"));
        assert!(json.contains("/reorder"));
    }
}

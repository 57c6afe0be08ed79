//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registry API",
        version = "0.1.0",
        description = "Food-registry product management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3005", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/products", api = domain_products::handlers::ProductsApiDoc),
        (path = "/api/v1/producers", api = domain_products::handlers::ProducersApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Producers", description = "Producer directory endpoints")
    )
)]
pub struct ApiDoc;

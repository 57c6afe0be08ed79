//! Product and producer API routes

use axum::Router;
use domain_products::{
    handlers, FsImageStore, InMemoryProducerRepository, InMemoryProductRepository, ProductService,
};

use crate::state::AppState;

/// Concrete service type wired up for this binary
pub type RegistryService =
    ProductService<InMemoryProductRepository, InMemoryProducerRepository, FsImageStore>;

/// Build the product service from application state
pub fn service(state: &AppState) -> RegistryService {
    let products = InMemoryProductRepository::new();
    let producers = InMemoryProducerRepository::new();
    let images = FsImageStore::new(
        state.config.upload.dir.clone(),
        state.config.upload.public_prefix.clone(),
    );

    ProductService::new(products, producers, images)
}

/// Create the products/producers router
pub fn router(state: &AppState) -> Router {
    let service = service(state);

    Router::new()
        .nest("/products", handlers::router(service.clone()))
        .nest("/producers", handlers::producer_router(service))
}

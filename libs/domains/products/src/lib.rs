//! Products Domain
//!
//! Domain implementation for the food-registry product catalog: products
//! registered under producers, with ownership enforcement and image upload.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules: validation, ownership
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────┐
//! │ Repositories, Store │  ← Data access + image storage (traits)
//! └──────┬──────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers, FsImageStore, InMemoryProducerRepository, InMemoryProductRepository,
//!     ProductService,
//! };
//!
//! let service = ProductService::new(
//!     InMemoryProductRepository::new(),
//!     InMemoryProducerRepository::new(),
//!     FsImageStore::new("uploads", "/uploads"),
//! );
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod producers;
pub mod repository;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{
    CreateProducer, CreateProduct, NutritionScore, Producer, Product, ProductFilter, UpdateProduct,
};
pub use producers::{InMemoryProducerRepository, ProducerRepository};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use storage::{FsImageStore, ImageStore, ImageUpload};

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Defines the data access interface for products. Implementations can use
/// different storage backends; the in-memory one below is the reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products matching the filter
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Update an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    /// Check if a product name is already taken under a producer
    async fn exists_by_name(&self, producer_id: Uuid, name: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let name_exists = products.values().any(|p| {
            p.producer_id == input.producer_id && p.name.to_lowercase() == input.name.to_lowercase()
        });

        if name_exists {
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.matches(&filter))
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        // Apply pagination
        let result: Vec<Product> = result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect();

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let producer_id = products
            .get(&id)
            .ok_or(ProductError::NotFound(id))?
            .producer_id;

        // Reject renames that collide with another product of the producer
        if let Some(ref new_name) = input.name {
            let name_exists = products.values().any(|p| {
                p.id != id
                    && p.producer_id == producer_id
                    && p.name.to_lowercase() == new_name.to_lowercase()
            });

            if name_exists {
                return Err(ProductError::DuplicateName(new_name.clone()));
            }
        }

        let product = products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_name(&self, producer_id: Uuid, name: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        let exists = products
            .values()
            .any(|p| p.producer_id == producer_id && p.name.to_lowercase() == name.to_lowercase());
        Ok(exists)
    }
}

//! Product service - business logic layer.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProducer, CreateProduct, Producer, Product, ProductFilter, UpdateProduct,
};
use crate::producers::ProducerRepository;
use crate::repository::ProductRepository;
use crate::storage::{ImageStore, ImageUpload};

/// Service layer for product management.
///
/// Handles validation, producer existence and ownership rules, and
/// orchestrates the repositories and the image store. Handlers never talk
/// to the repositories directly.
pub struct ProductService<R, P, S>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    products: Arc<R>,
    producers: Arc<P>,
    images: Arc<S>,
}

impl<R, P, S> Clone for ProductService<R, P, S>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            producers: Arc::clone(&self.producers),
            images: Arc::clone(&self.images),
        }
    }
}

impl<R, P, S> ProductService<R, P, S>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    pub fn new(products: R, producers: P, images: S) -> Self {
        Self {
            products: Arc::new(products),
            producers: Arc::new(producers),
            images: Arc::new(images),
        }
    }

    /// Resolve a producer and verify the caller owns it.
    async fn ensure_owned(&self, producer_id: Uuid, caller: &str) -> ProductResult<Producer> {
        let producer = self
            .producers
            .get_by_id(producer_id)
            .await?
            .ok_or(ProductError::ProducerNotFound(producer_id))?;

        if !producer.is_owned_by(caller) {
            return Err(ProductError::NotOwner {
                user: caller.to_string(),
                producer_id,
            });
        }

        Ok(producer)
    }

    /// Create a product under a producer owned by the caller.
    ///
    /// The producer must exist and belong to the caller before any
    /// creation call is made; an optional image is persisted afterwards
    /// and its URL written back to the product.
    #[instrument(skip(self, input, image), fields(product_name = %input.name))]
    pub async fn create_product(
        &self,
        caller: &str,
        input: CreateProduct,
        image: Option<ImageUpload>,
    ) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.ensure_owned(input.producer_id, caller).await?;

        if self
            .products
            .exists_by_name(input.producer_id, &input.name)
            .await?
        {
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = self.products.create(input).await?;

        match image {
            Some(upload) => {
                let image_url = self.images.save(upload).await?;
                self.products
                    .update(
                        product.id,
                        UpdateProduct {
                            image_url: Some(image_url),
                            ..Default::default()
                        },
                    )
                    .await
            }
            None => Ok(product),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products with filters
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.products.list(filter).await
    }

    /// Update a product owned by the caller.
    ///
    /// A missing product id is a bad request ("Product not found"), not a
    /// 404 - this mirrors the original endpoint's contract. Moving the
    /// product to another producer re-checks ownership of the target.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        caller: &str,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let existing = self
            .products
            .get_by_id(id)
            .await?
            .ok_or(ProductError::UpdateTarget(id))?;

        self.ensure_owned(existing.producer_id, caller).await?;

        if let Some(new_producer) = input.producer_id {
            if new_producer != existing.producer_id {
                self.ensure_owned(new_producer, caller).await?;
            }
        }

        self.products.update(id, input).await
    }

    /// Delete a product owned by the caller.
    ///
    /// A missing product id is a 404 and never reaches the repository's
    /// delete operation.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, caller: &str, id: Uuid) -> ProductResult<()> {
        let existing = self
            .products
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.ensure_owned(existing.producer_id, caller).await?;

        let deleted = self.products.delete(id).await?;
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// List all producers (feeds the product creation form)
    pub async fn list_producers(&self) -> ProductResult<Vec<Producer>> {
        self.producers.list().await
    }

    /// Get a producer by ID
    pub async fn get_producer(&self, id: Uuid) -> ProductResult<Producer> {
        self.producers
            .get_by_id(id)
            .await?
            .ok_or(ProductError::ProducerNotFound(id))
    }

    /// Register a new producer
    #[instrument(skip(self, input), fields(producer_name = %input.name))]
    pub async fn register_producer(&self, input: CreateProducer) -> ProductResult<Producer> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.producers.create(input).await
    }
}

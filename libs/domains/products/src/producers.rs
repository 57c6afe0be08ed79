use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProducer, Producer};

/// Repository trait for Producer lookups.
///
/// Product handling only ever reads producers (existence and ownership
/// checks); registration exists so the API is usable end to end.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProducerRepository: Send + Sync {
    /// Register a new producer
    async fn create(&self, input: CreateProducer) -> ProductResult<Producer>;

    /// Get a producer by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Producer>>;

    /// List all producers
    async fn list(&self) -> ProductResult<Vec<Producer>>;
}

/// In-memory implementation of ProducerRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryProducerRepository {
    producers: Arc<RwLock<HashMap<Uuid, Producer>>>,
}

impl InMemoryProducerRepository {
    pub fn new() -> Self {
        Self {
            producers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProducerRepository for InMemoryProducerRepository {
    async fn create(&self, input: CreateProducer) -> ProductResult<Producer> {
        let mut producers = self.producers.write().await;

        let producer = Producer::new(input);
        producers.insert(producer.id, producer.clone());

        tracing::info!(producer_id = %producer.id, "Registered producer");
        Ok(producer)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Producer>> {
        let producers = self.producers.read().await;
        Ok(producers.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Producer>> {
        let producers = self.producers.read().await;

        let mut result: Vec<Producer> = producers.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(result)
    }
}

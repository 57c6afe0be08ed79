use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Nutrition score - categorical front-of-pack rating for a food product
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum NutritionScore {
    /// Best nutritional quality
    A,
    B,
    C,
    D,
    /// Worst nutritional quality
    E,
}

/// Producer entity - a food manufacturer account that owns products
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Producer {
    /// Unique identifier
    pub id: Uuid,
    /// Display name of the producer
    pub name: String,
    /// Email of the user account allowed to manage this producer
    pub owner_email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Product entity - a food item registered under a producer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name (unique per producer)
    pub name: String,
    /// Producer this product belongs to
    pub producer_id: Uuid,
    /// Product description
    pub description: String,
    /// Categorical nutrition rating
    pub nutrition_score: NutritionScore,
    /// Category label (e.g. "Fruits", "Drinks")
    pub category: String,
    /// Public URL of the stored product image, if one was uploaded
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a new producer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProducer {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub owner_email: String,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub producer_id: Uuid,
    #[serde(default)]
    pub description: String,
    pub nutrition_score: NutritionScore,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// Move the product to another producer (ownership is re-checked)
    pub producer_id: Option<Uuid>,
    pub description: Option<String>,
    pub nutrition_score: Option<NutritionScore>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,
    /// Case-insensitive exact match on the category label
    pub category: Option<String>,
    /// Restrict to products of one producer
    pub producer_id: Option<Uuid>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            producer_id: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Producer {
    /// Create a new producer from the CreateProducer DTO
    pub fn new(input: CreateProducer) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            owner_email: input.owner_email,
            created_at: Utc::now(),
        }
    }

    /// Whether the given authenticated user may manage this producer.
    ///
    /// Email comparison is case-insensitive; mailbox addresses are.
    pub fn is_owned_by(&self, user_email: &str) -> bool {
        self.owner_email.eq_ignore_ascii_case(user_email)
    }
}

impl Product {
    /// Create a new product from the CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            producer_id: input.producer_id,
            description: input.description,
            nutrition_score: input.nutrition_score,
            category: input.category,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(producer_id) = update.producer_id {
            self.producer_id = producer_id;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(nutrition_score) = update.nutrition_score {
            self.nutrition_score = nutrition_score;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }

    /// Whether this product matches the given listing filter.
    ///
    /// Empty filters match everything, so an unfiltered listing returns
    /// the full set.
    pub fn matches(&self, filter: &ProductFilter) -> bool {
        if let Some(ref name) = filter.name {
            if !self.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref category) = filter.category {
            if !self.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(producer_id) = filter.producer_id {
            if self.producer_id != producer_id {
                return false;
            }
        }
        true
    }
}

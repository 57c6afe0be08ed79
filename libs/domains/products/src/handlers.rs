use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    CurrentUser, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProducer, CreateProduct, Producer, Product, ProductFilter, UpdateProduct,
};
use crate::producers::ProducerRepository;
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::storage::{ImageStore, ImageUpload};

const PRODUCTS_TAG: &str = "Products";
const PRODUCERS_TAG: &str = "Producers";

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ProductFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product management endpoints")
    )
)]
pub struct ProductsApiDoc;

/// OpenAPI documentation for the producer endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_producers, get_producer, register_producer),
    components(
        schemas(Producer, CreateProducer),
        responses(NotFoundResponse)
    ),
    tags(
        (name = PRODUCERS_TAG, description = "Producer directory endpoints")
    )
)]
pub struct ProducersApiDoc;

/// Create the product router
pub fn router<R, P, S>(service: ProductService<R, P, S>) -> Router
where
    R: ProductRepository + 'static,
    P: ProducerRepository + 'static,
    S: ImageStore + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create the producer router
pub fn producer_router<R, P, S>(service: ProductService<R, P, S>) -> Router
where
    R: ProductRepository + 'static,
    P: ProducerRepository + 'static,
    S: ImageStore + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_producers).post(register_producer))
        .route("/{id}", get(get_producer))
        .with_state(shared_service)
}

/// List products with optional name/category filters
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of matching products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product under a producer owned by the caller.
///
/// Accepts `multipart/form-data` with a `product` part holding the JSON
/// payload and an optional `image` file part.
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCTS_TAG,
    request_body(content = CreateProduct, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    CurrentUser(caller): CurrentUser,
    mut parts: Multipart,
) -> ProductResult<impl IntoResponse>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let mut input: Option<CreateProduct> = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = parts
        .next_field()
        .await
        .map_err(|e| ProductError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "product" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ProductError::Validation(format!("Unreadable product part: {}", e)))?;
                input = Some(serde_json::from_str(&raw).map_err(|e| {
                    ProductError::Validation(format!("Invalid product payload: {}", e))
                })?);
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ProductError::Validation(format!("Unreadable image part: {}", e)))?
                    .to_vec();
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let input =
        input.ok_or_else(|| ProductError::Validation("Missing 'product' form part".to_string()))?;

    let product = service.create_product(&caller, input, image).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product owned by the caller
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    CurrentUser(caller): CurrentUser,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let product = service.update_product(&caller, id, input).await?;
    Ok(Json(product))
}

/// Delete a product owned by the caller
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    CurrentUser(caller): CurrentUser,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    service.delete_product(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all producers
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCERS_TAG,
    responses(
        (status = 200, description = "List of producers", body = Vec<Producer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_producers<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
) -> ProductResult<Json<Vec<Producer>>>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let producers = service.list_producers().await?;
    Ok(Json(producers))
}

/// Get a producer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCERS_TAG,
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 200, description = "Producer found", body = Producer),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_producer<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Producer>>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let producer = service.get_producer(id).await?;
    Ok(Json(producer))
}

/// Register a new producer
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCERS_TAG,
    request_body = CreateProducer,
    responses(
        (status = 201, description = "Producer registered successfully", body = Producer),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn register_producer<R, P, S>(
    State(service): State<Arc<ProductService<R, P, S>>>,
    ValidatedJson(input): ValidatedJson<CreateProducer>,
) -> ProductResult<impl IntoResponse>
where
    R: ProductRepository,
    P: ProducerRepository,
    S: ImageStore,
{
    let producer = service.register_producer(input).await?;
    Ok((StatusCode::CREATED, Json(producer)))
}

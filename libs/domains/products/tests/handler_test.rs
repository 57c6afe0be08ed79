//! Handler tests for the products domain
//!
//! These tests verify that the HTTP handlers work correctly:
//! - Request deserialization (multipart/JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Only the domain routers are exercised here, not the full application
//! with tracing layers and docs routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

const OWNER: &str = "owner@orchard.example";
const BOUNDARY: &str = "registry-test-boundary";

type TestService =
    ProductService<InMemoryProductRepository, InMemoryProducerRepository, FsImageStore>;

/// Build a service over in-memory repositories with one seeded producer.
async fn setup() -> (TestService, Producer) {
    let producers = InMemoryProducerRepository::new();
    let producer = producers
        .create(CreateProducer {
            name: "Green Orchard".to_string(),
            owner_email: OWNER.to_string(),
        })
        .await
        .unwrap();

    let images = FsImageStore::new(
        std::env::temp_dir().join(format!("registry-handler-test-{}", Uuid::now_v7())),
        "/uploads",
    );

    let service = ProductService::new(InMemoryProductRepository::new(), producers, images);
    (service, producer)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a multipart body with a `product` JSON part and an optional
/// `image` file part.
fn multipart_body(product: &serde_json::Value, image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"product\"\r\n\
             Content-Type: application/json\r\n\r\n{product}\r\n"
        )
        .as_bytes(),
    );
    if let Some((file_name, content_type, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn create_request(
    caller: Option<&str>,
    product: &serde_json::Value,
    image: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(caller) = caller {
        builder = builder.header("x-user-email", caller);
    }
    builder
        .body(Body::from(multipart_body(product, image)))
        .unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let (service, producer) = setup().await;
    let app = handlers::router(service);

    let payload = json!({
        "name": "Apple",
        "producer_id": producer.id,
        "nutrition_score": "A",
        "category": "Fruits"
    });

    let response = app
        .oneshot(create_request(Some(OWNER), &payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Apple");
    assert_eq!(product.producer_id, producer.id);
    assert_eq!(product.nutrition_score, NutritionScore::A);
    assert!(product.image_url.is_none());
}

#[tokio::test]
async fn test_create_product_handler_stores_image() {
    let (service, producer) = setup().await;
    let app = handlers::router(service);

    let payload = json!({
        "name": "Apple",
        "producer_id": producer.id,
        "nutrition_score": "A",
        "category": "Fruits"
    });
    let image = (
        "apple.png",
        "image/png",
        &[0x89u8, 0x50, 0x4e, 0x47][..],
    );

    let response = app
        .oneshot(create_request(Some(OWNER), &payload, Some(image)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    let image_url = product.image_url.expect("image url should be set");
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".png"));
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let (service, producer) = setup().await;
    let app = handlers::router(service);

    // Invalid name (empty string)
    let payload = json!({
        "name": "",
        "producer_id": producer.id,
        "nutrition_score": "B",
        "category": "Fruits"
    });

    let response = app
        .oneshot(create_request(Some(OWNER), &payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_handler_unknown_producer_is_404() {
    let (service, _producer) = setup().await;
    let app = handlers::router(service);

    let payload = json!({
        "name": "Apple",
        "producer_id": Uuid::now_v7(),
        "nutrition_score": "A",
        "category": "Fruits"
    });

    let response = app
        .oneshot(create_request(Some(OWNER), &payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_handler_rejects_non_owner() {
    let (service, producer) = setup().await;
    let app = handlers::router(service);

    let payload = json!({
        "name": "Apple",
        "producer_id": producer.id,
        "nutrition_score": "A",
        "category": "Fruits"
    });

    let response = app
        .oneshot(create_request(
            Some("intruder@elsewhere.example"),
            &payload,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_product_handler_requires_identity() {
    let (service, producer) = setup().await;
    let app = handlers::router(service);

    let payload = json!({
        "name": "Apple",
        "producer_id": producer.id,
        "nutrition_score": "A",
        "category": "Fruits"
    });

    let response = app
        .oneshot(create_request(None, &payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_products_handler_with_filters() {
    let (service, producer) = setup().await;

    for (name, category) in [
        ("Apple", "Fruits"),
        ("Apple Juice", "Drinks"),
        ("Banana", "Fruits"),
    ] {
        let input = CreateProduct {
            name: name.to_string(),
            producer_id: producer.id,
            description: String::new(),
            nutrition_score: NutritionScore::B,
            category: category.to_string(),
        };
        service.create_product(OWNER, input, None).await.unwrap();
    }

    let app = handlers::router(service);

    // name is a substring match, category an exact match
    let request = Request::builder()
        .method("GET")
        .uri("/?name=Apple&category=Fruits")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Apple");
}

#[tokio::test]
async fn test_list_products_handler_without_filters_returns_all() {
    let (service, producer) = setup().await;

    for name in ["Apple", "Banana"] {
        let input = CreateProduct {
            name: name.to_string(),
            producer_id: producer.id,
            description: String::new(),
            nutrition_score: NutritionScore::C,
            category: "Fruits".to_string(),
        };
        service.create_product(OWNER, input, None).await.unwrap();
    }

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_get_product_handler_returns_404_for_missing() {
    let (service, _producer) = setup().await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_product_handler_changes_fields() {
    let (service, producer) = setup().await;

    let created = service
        .create_product(
            OWNER,
            CreateProduct {
                name: "Apple".to_string(),
                producer_id: producer.id,
                description: String::new(),
                nutrition_score: NutritionScore::B,
                category: "Fruits".to_string(),
            },
            None,
        )
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .header("x-user-email", OWNER)
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Dried Apple",
                "category": "Snacks"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Dried Apple");
    assert_eq!(product.category, "Snacks");
    assert_eq!(product.nutrition_score, NutritionScore::B);
}

#[tokio::test]
async fn test_update_missing_product_is_bad_request_with_message() {
    let (service, _producer) = setup().await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .header("x-user-email", OWNER)
        .body(Body::from(
            serde_json::to_string(&json!({"name": "Anything"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "Product not found");
}

#[tokio::test]
async fn test_delete_product_handler_returns_204() {
    let (service, producer) = setup().await;

    let created = service
        .create_product(
            OWNER,
            CreateProduct {
                name: "Apple".to_string(),
                producer_id: producer.id,
                description: String::new(),
                nutrition_score: NutritionScore::B,
                category: "Fruits".to_string(),
            },
            None,
        )
        .await
        .unwrap();

    let app = handlers::router(service.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .header("x-user-email", OWNER)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The record is gone afterwards
    let result = service.get_product(created.id).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let (service, _producer) = setup().await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("x-user-email", OWNER)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_producer_router_lists_and_registers() {
    let (service, producer) = setup().await;
    let app = handlers::producer_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let producers: Vec<Producer> = json_body(response.into_body()).await;
    assert_eq!(producers.len(), 1);
    assert_eq!(producers[0].id, producer.id);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Berry Farm",
                "owner_email": "berries@example.com"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

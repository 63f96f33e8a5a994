//! Handler tests for the Menu Items domain
//!
//! Drives the menu item router end to end over in-memory repositories:
//! filter combinations, availability defaults and toggling, referential
//! checks against categories, and the response envelope.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_categories::models::CategoryRequest;
use domain_categories::repository::{CategoryRepository, InMemoryCategoryRepository};
use domain_menu_items::{handlers, InMemoryMenuItemRepository, MenuItemService};
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::assertions::{assert_error_envelope, assert_success_envelope};
use tower::ServiceExt; // For oneshot()

/// Router plus the ids of two seeded categories
async fn app_with_categories() -> (Router, i64, i64) {
    let categories = InMemoryCategoryRepository::new();
    let noodles = categories
        .insert(CategoryRequest {
            name: "Noodles".to_string(),
            display_order: 1,
        })
        .await
        .unwrap();
    let rice = categories
        .insert(CategoryRequest {
            name: "Rice".to_string(),
            display_order: 2,
        })
        .await
        .unwrap();

    let repository = InMemoryMenuItemRepository::new(categories.clone());
    let service = MenuItemService::new(repository, categories);
    (handlers::router(service), noodles.id, rice.id)
}

async fn json_body(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn patch(uri: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_item(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

/// Seed the Pho/Bun/Com fixture: A(cat1, available, "Pho"),
/// B(cat1, unavailable, "Bun"), C(cat2, available, "Com").
async fn seeded_app() -> (Router, i64, i64) {
    let (app, cat1, cat2) = app_with_categories().await;

    create_item(
        &app,
        json!({"name": "Pho", "price": 45000, "categoryId": cat1, "available": true}),
    )
    .await;
    create_item(
        &app,
        json!({"name": "Bun", "price": 40000, "categoryId": cat1, "available": false}),
    )
    .await;
    create_item(
        &app,
        json!({"name": "Com", "price": 35000, "categoryId": cat2, "available": true}),
    )
    .await;

    (app, cat1, cat2)
}

async fn names_for(app: &Router, uri: &str) -> Vec<String> {
    let response = app.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_returns_201_with_category_name() {
    let (app, cat1, _) = app_with_categories().await;

    let body = create_item(
        &app,
        json!({"name": "Pho Bo", "price": 50000, "categoryId": cat1, "description": "Beef noodle soup"}),
    )
    .await;

    assert_success_envelope(&body, 201);
    assert_eq!(body["message"], "Menu item created");
    assert_eq!(body["data"]["name"], "Pho Bo");
    assert_eq!(body["data"]["categoryName"], "Noodles");
    assert_eq!(body["data"]["description"], "Beef noodle soup");
}

#[tokio::test]
async fn test_create_defaults_available_to_true() {
    let (app, cat1, _) = app_with_categories().await;

    let body = create_item(
        &app,
        json!({"name": "Pho", "price": 45000, "categoryId": cat1}),
    )
    .await;

    assert_eq!(body["data"]["available"], true);
}

#[tokio::test]
async fn test_create_with_unknown_category_returns_404() {
    let (app, _, _) = app_with_categories().await;

    let response = app
        .oneshot(post_json(
            "/",
            json!({"name": "Pho", "price": 45000, "categoryId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_error_envelope(&body, 404, "Category not found with id: 999");
}

#[tokio::test]
async fn test_create_negative_price_returns_field_errors() {
    let (app, cat1, _) = app_with_categories().await;

    let response = app
        .oneshot(post_json(
            "/",
            json!({"name": "Pho", "price": -5, "categoryId": cat1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["price"], "Price must be at least 0");
}

#[tokio::test]
async fn test_filter_matrix() {
    let (app, cat1, _) = seeded_app().await;

    assert_eq!(
        names_for(&app, &format!("/?categoryId={}", cat1)).await,
        vec!["Pho", "Bun"]
    );
    assert_eq!(
        names_for(&app, "/?available=true").await,
        vec!["Pho", "Com"]
    );
    assert_eq!(names_for(&app, "/?keyword=ho").await, vec!["Pho"]);
    assert_eq!(
        names_for(&app, &format!("/?categoryId={}&available=true", cat1)).await,
        vec!["Pho"]
    );
    assert_eq!(names_for(&app, "/").await, vec!["Pho", "Bun", "Com"]);
}

#[tokio::test]
async fn test_blank_keyword_matches_everything() {
    let (app, _, _) = seeded_app().await;

    assert_eq!(
        names_for(&app, "/?keyword=%20%20").await,
        vec!["Pho", "Bun", "Com"]
    );
}

#[tokio::test]
async fn test_update_moves_item_between_categories() {
    let (app, cat1, cat2) = app_with_categories().await;

    let created = create_item(
        &app,
        json!({"name": "Com Tam", "price": 35000, "categoryId": cat1}),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(put_json(
            &format!("/{}", id),
            json!({"name": "Com Tam", "price": 38000, "categoryId": cat2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["categoryId"], cat2);
    assert_eq!(body["data"]["categoryName"], "Rice");
    assert_eq!(body["data"]["price"], 38000);
}

#[tokio::test]
async fn test_update_without_available_keeps_stored_value() {
    let (app, cat1, _) = app_with_categories().await;

    let created = create_item(
        &app,
        json!({"name": "Bun Cha", "price": 40000, "categoryId": cat1, "available": false}),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(put_json(
            &format!("/{}", id),
            json!({"name": "Bun Cha Ha Noi", "price": 42000, "categoryId": cat1}),
        ))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["available"], false);
    assert_eq!(body["data"]["name"], "Bun Cha Ha Noi");
}

#[tokio::test]
async fn test_toggle_twice_restores_original_value() {
    let (app, cat1, _) = app_with_categories().await;

    let created = create_item(
        &app,
        json!({"name": "Pho", "price": 45000, "categoryId": cat1}),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(patch(&format!("/{}/toggle-availability", id)))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Availability toggled");
    assert_eq!(body["data"]["available"], false);

    let response = app
        .oneshot(patch(&format!("/{}/toggle-availability", id)))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["available"], true);
}

#[tokio::test]
async fn test_toggle_missing_item_returns_404() {
    let (app, _, _) = app_with_categories().await;

    let response = app
        .oneshot(patch("/404/toggle-availability"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_error_envelope(&body, 404, "Menu item not found with id: 404");
}

#[tokio::test]
async fn test_delete_returns_null_data() {
    let (app, cat1, _) = app_with_categories().await;

    let created = create_item(
        &app,
        json!({"name": "Pho", "price": 45000, "categoryId": cat1}),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Menu item deleted");
    assert!(body["data"].is_null());

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

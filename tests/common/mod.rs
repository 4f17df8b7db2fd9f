#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use http::{Request, StatusCode};
use axum::Router;
use sales_report_api::database;
use sales_report_api::seed::{load_products, SeedMode};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// A record shaped like one element of the remote dataset.
pub fn product(title: &str, price: f64, category: &str, sold: bool, date_of_sale: &str) -> Value {
    json!({
        "id": 0,
        "title": title,
        "price": price,
        "description": format!("{title} description"),
        "category": category,
        "image": format!("https://example.com/{title}.jpg"),
        "sold": sold,
        "dateOfSale": date_of_sale,
    })
}

pub async fn seeded_pool(products: &[Value]) -> SqlitePool {
    let pool = match database::create_memory_pool().await {
        Ok(pool) => pool,
        Err(err) => panic!("failed to open in-memory database: {err}"),
    };
    if let Err(err) = load_products(&pool, products, SeedMode::Atomic, false).await {
        panic!("failed to seed: {err}");
    }
    pool
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = match router
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap_or_else(|err| panic!("failed to build request: {err}")),
        )
        .await
    {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();
    let bytes = match to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => (status, value),
        Err(err) => panic!("response body is not JSON: {err}"),
    }
}

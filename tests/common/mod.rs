//! Shared wiring for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use rentpro::adapters::http::{build_router, AppState};
use rentpro::adapters::InMemoryRentalStore;
use rentpro::config::ServerConfig;
use rentpro::domain::foundation::CriterionId;
use rentpro::domain::preference::{Criterion, CriterionKey};
use rentpro::domain::recommendation::{Area, CandidateProperty, RecommendationPolicy};

pub const TENANT: &str = "tenant-42";

pub fn criterion(id: i32, key: &str, label: &str, is_benefit: bool) -> Criterion {
    Criterion::new(
        CriterionId::new(id),
        CriterionKey::new(key).unwrap(),
        label,
        is_benefit,
    )
}

/// The four rental criteria as seeded by the initial migration.
pub fn rental_criteria() -> Vec<Criterion> {
    vec![
        criterion(1, "price", "Price", false),
        criterion(2, "size", "Size", true),
        criterion(3, "property_type", "Property type", true),
        criterion(4, "area_score", "Area score", true),
    ]
}

pub async fn seeded_store() -> InMemoryRentalStore {
    let store = InMemoryRentalStore::new(rental_criteria());
    store.add_area(Area::new("MAROUSI", "Marousi", 8.0)).await;
    store.add_area(Area::new("PERISTERI", "Peristeri", 5.0)).await;
    store
}

pub fn listing(
    reference: &str,
    price: f64,
    size: f64,
    property_type: &str,
    area: &str,
) -> CandidateProperty {
    CandidateProperty::new(reference, format!("Listing {}", reference), price, size, property_type)
        .with_address(format!("{} Example St", reference))
        .in_area(area)
}

pub fn app_with_policy(store: &InMemoryRentalStore, policy: RecommendationPolicy) -> Router {
    let state = AppState {
        preferences: Arc::new(store.clone()),
        criteria: Arc::new(store.clone()),
        recommendations: Arc::new(store.clone()),
        policy,
    };
    build_router(state, &ServerConfig::default())
}

pub fn app(store: &InMemoryRentalStore) -> Router {
    app_with_policy(store, RecommendationPolicy::default())
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn judgment(a: &str, b: &str, value: f64) -> Value {
    serde_json::json!({ "criterion_a_key": a, "criterion_b_key": b, "value": value })
}

/// A complete, consistent batch over the four rental criteria (CR about 0.0015).
pub fn consistent_batch() -> Value {
    serde_json::json!({
        "comparisons": [
            judgment("price", "size", 3.0),
            judgment("price", "property_type", 5.0),
            judgment("price", "area_score", 3.0),
            judgment("size", "property_type", 2.0),
            judgment("size", "area_score", 1.0),
            judgment("property_type", "area_score", 0.5),
        ]
    })
}

/// Every criterion judged equally important.
pub fn equal_batch() -> Value {
    serde_json::json!({
        "comparisons": [
            judgment("price", "size", 1.0),
            judgment("price", "property_type", 1.0),
            judgment("price", "area_score", 1.0),
            judgment("size", "property_type", 1.0),
            judgment("size", "area_score", 1.0),
            judgment("property_type", "area_score", 1.0),
        ]
    })
}

/// A circular batch whose consistency ratio is far above 0.10 (about 4.0).
pub fn contradictory_batch() -> Value {
    serde_json::json!({
        "comparisons": [
            judgment("price", "size", 9.0),
            judgment("size", "property_type", 9.0),
            judgment("property_type", "area_score", 9.0),
            judgment("price", "area_score", 1.0 / 9.0),
            judgment("price", "property_type", 1.0 / 9.0),
            judgment("size", "area_score", 1.0 / 9.0),
        ]
    })
}

pub async fn create_profile(app: &Router, user: &str) {
    let (status, _) = send(app, Method::PUT, "/preference-profiles/me", Some(user), None).await;
    assert_eq!(status, StatusCode::CREATED);
}

pub async fn submit(app: &Router, user: &str, batch: Value) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/preference-profiles/me/pairwise-comparisons",
        Some(user),
        Some(batch),
    )
    .await
}

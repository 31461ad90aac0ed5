//! Integration tests for `GET /recommendations`.
//!
//! Cover the full pipeline through the router: prerequisite checks, the
//! consistency gate, category handling and the ranked response shape.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use rentpro::domain::recommendation::RecommendationPolicy;

use common::*;

async fn recommendations(app: &axum::Router) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, "/recommendations", Some(TENANT), None).await
}

#[tokio::test]
async fn dominant_listing_ranks_first() {
    let store = seeded_store().await;
    store.add_candidate(listing("b", 1100.0, 45.0, "STUDIO", "PERISTERI")).await;
    store.add_candidate(listing("a", 900.0, 80.0, "APARTMENT", "MAROUSI")).await;
    let app = app(&store);
    create_profile(&app, TENANT).await;
    submit(&app, TENANT, equal_batch()).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["candidate_ref"], "a");
    assert_eq!(items[0]["score"], 1.0);
    assert_eq!(items[1]["candidate_ref"], "b");
    assert_eq!(items[1]["score"], 0.0);

    let explain = &items[0]["explain"];
    assert_eq!(explain["ahp"]["cr"], 0.0);
    assert_eq!(explain["ahp"]["weights"]["price"], 0.25);
    assert_eq!(explain["topsis"]["d_best"], 0.0);
    assert_eq!(
        explain["topsis"]["criteria_values"],
        json!({ "price": 900.0, "size": 80.0, "property_type": 2.0, "area_score": 8.0 })
    );
    assert_eq!(items[0]["property"]["area_code"], "MAROUSI");
    assert_eq!(items[0]["property"]["title"], "Listing a");
}

#[tokio::test]
async fn meta_describes_the_computation() {
    let store = seeded_store().await;
    store.add_candidate(listing("a", 900.0, 80.0, "APARTMENT", "MAROUSI")).await;
    store.add_candidate(listing("c", 1000.0, 60.0, "MAISONETTE", "NOWHERE")).await;
    let app = app(&store);
    create_profile(&app, TENANT).await;
    submit(&app, TENANT, consistent_batch()).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::OK);
    let meta = &body["meta"];
    assert_eq!(
        meta["criteria_order"],
        json!(["price", "size", "property_type", "area_score"])
    );
    assert_eq!(meta["is_benefit"], json!([false, true, true, true]));
    assert_eq!(meta["cr_threshold"], 0.1);
    assert_eq!(meta["candidates_total"], 2);
    assert_eq!(meta["ranked_count"], 2);
    assert_eq!(meta["missing_score_count"], 1);
    assert!(meta.get("unknown_categories").is_none());
}

#[tokio::test]
async fn no_listings_is_an_empty_success() {
    let store = seeded_store().await;
    let app = app(&store);
    create_profile(&app, TENANT).await;
    submit(&app, TENANT, consistent_batch()).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["meta"]["ranked_count"], 0);
    assert_eq!(body["meta"]["candidates_total"], 0);
}

#[tokio::test]
async fn missing_profile_returns_404() {
    let store = seeded_store().await;
    let app = app(&store);

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROFILE_NOT_FOUND");
}

#[tokio::test]
async fn missing_comparisons_return_409() {
    let store = seeded_store().await;
    let app = app(&store);
    create_profile(&app, TENANT).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "COMPARISONS_NOT_SET");
}

#[tokio::test]
async fn inconsistent_judgments_return_422_with_ratio() {
    let store = seeded_store().await;
    store.add_candidate(listing("a", 900.0, 80.0, "APARTMENT", "MAROUSI")).await;
    let app = app(&store);
    create_profile(&app, TENANT).await;
    let (status, _) = submit(&app, TENANT, contradictory_batch()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "AHP_INCONSISTENT");
    assert_eq!(body["details"]["threshold"], 0.1);
    let cr = body["details"]["cr"].as_f64().unwrap();
    assert!((cr - 4.0055).abs() < 1e-3, "unexpected CR {}", cr);
}

#[tokio::test]
async fn unknown_category_fails_in_strict_mode() {
    let store = seeded_store().await;
    store.add_candidate(listing("a", 900.0, 80.0, "APARTMENT", "MAROUSI")).await;
    store.add_candidate(listing("v", 2500.0, 200.0, "villa", "MAROUSI")).await;
    store.add_candidate(listing("l", 1300.0, 90.0, "Loft", "PERISTERI")).await;
    let app = app(&store);
    create_profile(&app, TENANT).await;
    submit(&app, TENANT, consistent_batch()).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_CATEGORY");
    assert_eq!(body["details"]["unknown_types"], json!(["LOFT", "VILLA"]));
}

#[tokio::test]
async fn unknown_category_is_skipped_in_lenient_mode() {
    let store = seeded_store().await;
    store.add_candidate(listing("a", 900.0, 80.0, "APARTMENT", "MAROUSI")).await;
    store.add_candidate(listing("v", 2500.0, 200.0, "villa", "MAROUSI")).await;
    let policy = RecommendationPolicy::default().with_strict_category_mapping(false);
    let app = app_with_policy(&store, policy);
    create_profile(&app, TENANT).await;
    submit(&app, TENANT, consistent_batch()).await;

    let (status, body) = recommendations(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["candidate_ref"], "a");
    assert_eq!(body["meta"]["candidates_total"], 2);
    assert_eq!(body["meta"]["ranked_count"], 1);
    assert_eq!(body["meta"]["unknown_categories"], json!(["VILLA"]));
}

#[tokio::test]
async fn request_without_identity_is_unauthorized() {
    let store = seeded_store().await;
    let app = app(&store);

    let (status, body) = send(&app, Method::GET, "/recommendations", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

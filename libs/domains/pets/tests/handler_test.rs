//! Handler tests for the Pets domain
//!
//! Drive the pets router end to end against the in-memory repository:
//! - Request deserialization and validation
//! - Response shape (formatted rate, contact number, timestamps)
//! - HTTP status codes and error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, TimeZone};
use domain_pets::clock::ist;
use domain_pets::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(PetService::new(InMemoryPetRepository::new()))
}

fn app_with_clock(clock: Arc<ManualClock>) -> Router {
    handlers::router(PetService::with_clock(InMemoryPetRepository::new(), clock))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> PetResponse {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/pets/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_returns_formatted_pet() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/pets/",
            json!({"breed": "Labrador", "pet_type": "dog", "rate": 500}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"].as_str().unwrap().len(), 24);
    assert_eq!(body["breed"], "Labrador");
    assert_eq!(body["rate"], "₹500.00");
    assert_eq!(body["contact_number"], "7036131241");
    assert_eq!(body["age"], Value::Null);
    assert_eq!(body["updated_at"], Value::Null);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_then_get_round_trips_fields() {
    let app = app();
    let created = create(
        &app,
        json!({
            "breed": "Persian",
            "pet_type": "cat",
            "age": 1.5,
            "rate": 19.5,
            "description": "Fluffy",
            "image_url": "https://img.example/persian.png"
        }),
    )
    .await;

    let response = app
        .oneshot(empty_request("GET", &format!("/pets/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: PetResponse = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched.age, Some(Age::Fractional(1.5)));
    assert_eq!(fetched.rate, "₹19.50");
    assert_eq!(fetched.description.as_deref(), Some("Fluffy"));
}

#[tokio::test]
async fn test_integer_age_stays_integer() {
    let app = app();
    let created = create(
        &app,
        json!({"breed": "Beagle", "pet_type": "dog", "age": 2, "rate": 100}),
    )
    .await;

    let body = serde_json::to_value(&created).unwrap();
    assert_eq!(body["age"], json!(2));
    assert!(body["age"].is_i64());
    assert_eq!(body["rate"], "₹100.00");
}

#[tokio::test]
async fn test_list_answers_with_and_without_trailing_slash() {
    let app = app();
    create(&app, json!({"breed": "A", "pet_type": "dog", "rate": 1})).await;
    create(&app, json!({"breed": "B", "pet_type": "cat", "rate": 2})).await;

    for uri in ["/pets", "/pets/"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let pets: Vec<PetResponse> = json_body(response.into_body()).await;
        let breeds: Vec<_> = pets.iter().map(|p| p.breed.as_str()).collect();
        assert_eq!(breeds, ["A", "B"]);
    }
}

#[tokio::test]
async fn test_update_replaces_fields_and_refreshes_updated_at() {
    let clock = Arc::new(ManualClock::new(
        ist().with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap(),
    ));
    let app = app_with_clock(clock.clone());

    let created = create(
        &app,
        json!({"breed": "Labrador", "pet_type": "dog", "rate": 500, "description": "Calm"}),
    )
    .await;
    assert_eq!(created.created_at.as_deref(), Some("2024-03-01 14:05:09"));

    clock.advance(Duration::seconds(30));

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/pets/{}", created.id),
            json!({"breed": "Golden Retriever", "pet_type": "dog", "rate": 650.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: PetResponse = json_body(response.into_body()).await;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.breed, "Golden Retriever");
    assert_eq!(updated.rate, "₹650.50");
    // omitted optional fields are cleared, not merged
    assert!(updated.description.is_none());
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at.as_deref(), Some("2024-03-01 14:05:39"));
    assert!(updated.updated_at > updated.created_at);

    let fetched: PetResponse = json_body(
        app.oneshot(empty_request("GET", &format!("/pets/{}", created.id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_within_the_same_second_repeats_created_at() {
    let clock = Arc::new(ManualClock::new(
        ist().with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap(),
    ));
    let app = app_with_clock(clock.clone());

    let created = create(&app, json!({"breed": "Pug", "pet_type": "dog", "rate": 300})).await;

    // timestamps resolve to whole seconds
    clock.advance(Duration::milliseconds(400));

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/pets/{}", created.id),
            json!({"breed": "Pug", "pet_type": "dog", "rate": 320}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: PetResponse = json_body(response.into_body()).await;

    assert_eq!(updated.rate, "₹320.00");
    assert_eq!(updated.updated_at, created.created_at);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = app();
    let body = json!({"breed": "Labrador", "pet_type": "dog", "rate": 500});

    for request in [
        empty_request("GET", "/pets/xyz"),
        json_request("PUT", "/pets/xyz", body),
        empty_request("DELETE", "/pets/xyz"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["message"], "Invalid pet ID format");
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = app();
    let id = "65f1c0ffee0ddba11ca7f00d";
    let body = json!({"breed": "Labrador", "pet_type": "dog", "rate": 500});

    for request in [
        empty_request("GET", &format!("/pets/{id}")),
        json_request("PUT", &format!("/pets/{id}"), body),
        empty_request("DELETE", &format!("/pets/{id}")),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["message"], "Pet not found");
        assert_eq!(error["error"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_delete_one_then_get_is_not_found() {
    let app = app();
    let created = create(&app, json!({"breed": "Pug", "pet_type": "dog", "rate": 300})).await;
    let uri = format!("/pets/{}", created.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(message.message, "Pet deleted successfully");

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_reports_count_and_empties_list() {
    let app = app();
    create(&app, json!({"breed": "Labrador", "pet_type": "dog", "rate": 500})).await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/pets/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "Deleted 1 pets successfully"}));

    let response = app.oneshot(empty_request("GET", "/pets/")).await.unwrap();
    let pets: Value = json_body(response.into_body()).await;
    assert_eq!(pets, json!([]));
}

#[tokio::test]
async fn test_empty_breed_is_rejected_with_details() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/pets/",
            json!({"breed": "", "pet_type": "dog", "rate": 500}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");
    assert!(error["details"]["breed"].is_array());
}

#[tokio::test]
async fn test_missing_rate_is_unprocessable() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/pets/",
            json!({"breed": "Labrador", "pet_type": "dog"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_wrong_rate_type_is_unprocessable() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/pets/",
            json!({"breed": "Labrador", "pet_type": "dog", "rate": "cheap"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

//! End-to-end tests for the composed registration API
//!
//! The first group runs against stores that cannot be reached, so no Docker is needed.
//! The second group needs Docker for a MongoDB testcontainer and is ignored by default:
//! `cargo test -p registration_api -- --ignored`

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use database::mongodb::{ConnectionState, MongoConfig};
use http_body_util::BodyExt;
use registration_api::{build_app, config::Config, state::AppState};
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn unreachable_store() -> MongoConfig {
    MongoConfig::new("mongodb://127.0.0.1:1/?directConnection=true").with_timeouts(1, 1)
}

fn app_for(mongodb: MongoConfig) -> (Router, AppState) {
    let state = AppState::new(Config::new(mongodb));
    let app = build_app(&state).unwrap();
    (app, state)
}

#[tokio::test]
async fn test_health_is_ok_without_a_store() {
    let (app, state) = app_for(MongoConfig::default());

    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"status": "OK", "message": "Server is running"})
    );
    assert_eq!(state.connections.state(), ConnectionState::Disconnected);
}

#[tokio::test]
async fn test_unreachable_store_returns_500_envelopes() {
    let (app, _state) = app_for(unreachable_store());

    let response = app
        .clone()
        .oneshot(register(json!({"name": "Alice", "team": "A"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Registration failed");
    assert!(!body["error"].as_str().unwrap().is_empty());

    let response = app.clone().oneshot(get("/api/registrations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to fetch registrations");
    assert!(!body["error"].as_str().unwrap().is_empty());

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_connection_string_is_reported() {
    let (app, _state) = app_for(MongoConfig::default());

    let response = app.oneshot(register(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("MONGODB_URI"));
}

#[tokio::test]
async fn test_malformed_connection_string_is_reported() {
    let (app, _state) = app_for(MongoConfig::new("definitely not a uri"));

    let response = app.oneshot(get("/api/registrations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["success"], false);
}

#[tokio::test]
async fn test_ready_reports_unreachable_store() {
    let (app, _state) = app_for(unreachable_store());

    let response = app.oneshot(get("/api/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["mongodb"], false);
}

#[tokio::test]
async fn test_malformed_json_is_rejected_before_the_store() {
    let (app, state) = app_for(unreachable_store());

    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.connections.state(), ConnectionState::Disconnected);
}

#[tokio::test]
async fn test_cors_preflight_is_permissive() {
    let (app, _state) = app_for(MongoConfig::default());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/register")
        .header("origin", "https://hackathon.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_restricted_cors_rejects_invalid_origin_config() {
    let mut config = Config::new(MongoConfig::default());
    config.cors_allowed_origins = "https://ok.example,\u{7f}".to_string();

    assert!(build_app(&AppState::new(config)).is_err());
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (app, _state) = app_for(MongoConfig::default());

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    for path in ["/api/health", "/api/ready", "/api/register", "/api/registrations"] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _state) = app_for(MongoConfig::default());

    let response = app.oneshot(get("/api/unknown")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hosted_root_builds_without_binding() {
    let router = registration_api::hosted(Config::new(MongoConfig::default())).unwrap();

    let response = router.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Against a real MongoDB
// ---------------------------------------------------------------------------

fn app_on(mongo: &TestMongo, builder: &TestDataBuilder) -> (Router, AppState) {
    app_for(MongoConfig::new(mongo.connection_string()).with_database(builder.database()))
}

async fn list(app: &Router) -> Value {
    let response = app.clone().oneshot(get("/api/registrations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_register_then_list_returns_stamped_document() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("register_then_list");
    let (app, state) = app_on(&mongo, &builder);

    let started: DateTime<Utc> = Utc::now();
    let response = app
        .clone()
        .oneshot(register(json!({"name": "Alice", "team": "A"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Registration successful");
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);
    assert_eq!(state.connections.state(), ConnectionState::Connected);

    let body = list(&app).await;
    assert_eq!(body["success"], true);
    assert!(body["count"].as_u64().unwrap() >= 1);
    assert_eq!(body["count"].as_u64().unwrap() as usize, body["data"].as_array().unwrap().len());

    let stored = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|doc| doc["_id"] == id.as_str())
        .expect("inserted document should be listed");
    assert_eq!(stored["name"], "Alice");
    assert_eq!(stored["team"], "A");

    let submitted_at: DateTime<Utc> = stored["submittedAt"].as_str().unwrap().parse().unwrap();
    // BSON dates have millisecond precision
    assert!(submitted_at.timestamp_millis() >= started.timestamp_millis());

    assert!(state.connections.close().await);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_empty_object_is_stored_with_only_submitted_at() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("empty_object");
    let (app, _state) = app_on(&mongo, &builder);

    let response = app.clone().oneshot(register(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = list(&app).await;
    assert_eq!(body["count"], 1);
    let stored = body["data"][0].as_object().unwrap();
    let mut keys: Vec<&str> = stored.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["_id", "submittedAt"]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_payload_fields_are_a_subset_of_the_stored_document() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("payload_subset");
    let (app, _state) = app_on(&mongo, &builder);

    let payload = builder.registration("carol");
    let response = app.clone().oneshot(register(payload.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = list(&app).await;
    let stored = &body["data"][0];
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&stored[key], value, "field {key}");
    }
    assert!(stored["submittedAt"].is_string());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_repeated_reads_return_the_same_documents() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("idempotent_reads");
    let (app, _state) = app_on(&mongo, &builder);

    for participant in ["dave", "erin", "frank"] {
        let response = app
            .clone()
            .oneshot(register(builder.registration(participant)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let ids = |body: &Value| {
        let mut ids: Vec<String> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["_id"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        ids
    };

    let first = list(&app).await;
    let second = list(&app).await;
    assert_eq!(first["count"], 3);
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_concurrent_first_requests_share_one_connection() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("concurrent_first_use");
    let (app, state) = app_on(&mongo, &builder);

    let requests = (0..8).map(|i| {
        let app = app.clone();
        tokio::spawn(async move { app.oneshot(register(json!({"seq": i}))).await.unwrap() })
    });
    for handle in requests {
        assert_eq!(handle.await.unwrap().status(), StatusCode::CREATED);
    }

    assert_eq!(state.connections.state(), ConnectionState::Connected);
    assert_eq!(list(&app).await["count"], 8);
}

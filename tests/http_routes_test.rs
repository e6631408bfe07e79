//! Route wiring tests for the JSON endpoint.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use laptop_tiers::server::{create_router, AppState};
use laptop_tiers::ServerSettings;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> axum::Router {
    create_router(AppState::new(), &ServerSettings::default())
}

fn workstation_body() -> Value {
    json!({
        "processor": {
            "manufacturer": "Intel",
            "brand": "Core",
            "modifier": "i9",
            "generation": 12,
            "cores": 8,
            "clock_speed_ghz": 3.6
        },
        "gpu": {
            "form": "Dedicated",
            "manufacturer": "NVIDIA",
            "brand_prefix": "GeForce RTX",
            "cores": 4096,
            "vram_gb": 8
        },
        "ram": { "size_gb": 16 },
        "storage": { "size_gb": 1024, "is_ssd": true }
    })
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn recommend_returns_tiers_and_activities() {
    let response = app()
        .oneshot(post_json("/recommend", workstation_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["processor_tier"], "high-end");
    assert_eq!(body["gpu_tier"], "high-end");
    assert_eq!(
        body["activities"],
        json!([
            "Video Editing and Production",
            "Animations and 3D Rendering",
            "Data Science and Analytics",
            "Machine Learning",
            "Gaming"
        ])
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(post_json("/recommend", "{\"processor\": ".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn negative_numbers_are_bad_request() {
    let mut body = workstation_body();
    body["ram"]["size_gb"] = json!(-16);

    let response = app()
        .oneshot(post_json("/recommend", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_spec_is_bad_request() {
    let mut body = workstation_body();
    body["processor"]["cores"] = json!(0);

    let response = app()
        .oneshot(post_json("/recommend", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("processor.cores"));
}

#[tokio::test]
async fn unknown_gpu_form_is_bad_request() {
    let mut body = workstation_body();
    body["gpu"]["form"] = json!("egpu");

    let response = app()
        .oneshot(post_json("/recommend", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let response = app()
        .oneshot(Request::builder().uri("/recommend").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let request = Request::builder()
        .method("POST")
        .uri("/recommend")
        .header(header::ORIGIN, "https://shop.example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(workstation_body().to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn cors_restricts_to_configured_origins() {
    let settings = ServerSettings {
        allowed_origins: vec!["https://shop.example.com".to_string()],
        ..ServerSettings::default()
    };
    let router = create_router(AppState::new(), &settings);

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://other.example.com")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

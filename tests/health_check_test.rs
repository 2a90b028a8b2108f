mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::TestApp;
use location_directory::config::{AuthSettings, ServerSettings, Settings};
use location_directory::models::LOCATIONS;
use location_directory::startup::build_router;
use location_directory::AppState;
use secrecy::Secret;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_reports_status_endpoints_and_count() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["status"], "MedRehab Location API Running");
    assert_eq!(
        body["endpoints"],
        serde_json::json!(["/get-locations", "/find-location"])
    );
    assert_eq!(body["locations_count"], LOCATIONS.len());
}

#[tokio::test]
async fn health_check_needs_no_credential() {
    let app = TestApp::spawn().await;

    // No Authorization header at all.
    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
}

/// Router test that exercises `build_router` directly, without a listener.
#[tokio::test]
async fn router_serves_health_check() {
    let config = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        auth: AuthSettings {
            token: Secret::new(common::TEST_TOKEN.to_string()),
        },
    };
    let app = build_router(AppState { config });

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_carries_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .header("Origin", "https://booking.example.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

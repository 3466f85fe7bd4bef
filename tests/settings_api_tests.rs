mod common;

use axum::http::{header, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

async fn enable_maintenance(app: &TestApp, message: Option<&str>) {
    let mut payload = json!({ "maintenanceMode": true });
    if let Some(message) = message {
        payload["maintenanceMessage"] = json!(message);
    }
    let resp = app
        .router
        .clone()
        .oneshot(json_request("PUT", "/api/settings", payload, Some(&bearer("admin"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_defaults_before_first_save() {
    let app = test_app();
    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/settings", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["maintenanceMode"], false);
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = test_app();
    let admin = bearer("admin");
    for payload in [
        json!({ "companyName": "Showroom", "phone": "+213 555 000 111" }),
        json!({ "address": "12 Rue des Oliviers" }),
    ] {
        let resp = app
            .router
            .clone()
            .oneshot(json_request("PUT", "/api/settings", payload, Some(&admin)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let body = body_json(
        app.router
            .clone()
            .oneshot(empty_request("GET", "/api/settings", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["companyName"], "Showroom");
    assert_eq!(body["phone"], "+213 555 000 111");
    assert_eq!(body["address"], "12 Rue des Oliviers");
}

#[tokio::test]
async fn test_invalid_settings_rejected() {
    let app = test_app();
    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            json!({ "email": "nope", "facebookUrl": "not a url" }),
            Some(&bearer("admin")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_maintenance_redirects_public_pages_only() {
    let app = test_app();

    // Off: unknown public page is a plain 404
    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/projects", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    enable_maintenance(&app, None).await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/projects", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/maintenance");

    for path in ["/api/settings", "/health"] {
        let resp = app
            .router
            .clone()
            .oneshot(empty_request("GET", path, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{} should pass through", path);
    }
}

#[tokio::test]
async fn test_maintenance_notice() {
    let app = test_app();
    enable_maintenance(&app, Some("Back at noon")).await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/maintenance", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["maintenance"], true);
    assert_eq!(body["message"], "Back at noon");
}

#[tokio::test]
async fn test_turning_maintenance_off_takes_effect_immediately() {
    let app = test_app();
    enable_maintenance(&app, None).await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            json!({ "maintenanceMode": false }),
            Some(&bearer("admin")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/projects", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

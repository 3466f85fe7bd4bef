mod common;

use axum::http::StatusCode;
use bson::oid::ObjectId;
use common::*;
use serde_json::json;
use showroom_backend::config::AppConfig;
use showroom_backend::model::product::Product;
use tower::ServiceExt;

fn booking() -> serde_json::Value {
    json!({
        "customerName": "Karim B",
        "customerPhone": "+213 555 123 456",
        "preferredDate": "2026-11-02",
        "address": "12 Rue des Oliviers, Algiers",
        "productModel": "EWH-80",
        "notes": "Second floor"
    })
}

fn with_whatsapp() -> TestApp {
    test_app_with(
        AppConfig { whatsapp_number: Some("+213 555 000 111".to_string()), ..AppConfig::default() },
        None,
    )
}

#[tokio::test]
async fn test_booking_returns_whatsapp_link() {
    let app = with_whatsapp();
    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", booking(), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["booking"]["status"], "pending");
    let url = body["whatsappUrl"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/213555000111?text="));
    assert!(url.contains("EWH-80"));
}

#[tokio::test]
async fn test_settings_number_wins_over_fallback() {
    let app = with_whatsapp();
    *app.settings.0.lock().unwrap() = Some(showroom_backend::model::settings::Settings {
        whatsapp_number: Some("+1 555 0100 200".to_string()),
        ..Default::default()
    });

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", booking(), None))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["whatsappUrl"].as_str().unwrap().starts_with("https://wa.me/15550100200?"));
}

#[tokio::test]
async fn test_no_number_means_no_link() {
    let app = test_app();
    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", booking(), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_json(resp).await.get("whatsappUrl").is_none());
}

#[tokio::test]
async fn test_unknown_product_rejected() {
    let app = test_app();
    let mut payload = booking();
    payload["productId"] = json!(ObjectId::new().to_hex());

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", payload, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.bookings.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_known_product_is_linked() {
    let app = test_app();
    let product_id = ObjectId::new();
    app.products.0.lock().unwrap().push(Product {
        id: Some(product_id),
        name: "Electric Water Heater".to_string(),
        model: "EWH-80".to_string(),
        category: "water-heaters".to_string(),
        capacity: "80 L".to_string(),
        price: 219.0,
        image_url: None,
        description: None,
        features: vec![],
        in_stock: true,
        created_at: None,
        updated_at: None,
    });
    let mut payload = booking();
    payload["productId"] = json!(product_id.to_hex());

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", payload, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["booking"]["productId"], product_id.to_hex());
}

#[tokio::test]
async fn test_bad_date_rejected() {
    let app = test_app();
    let mut payload = booking();
    payload["preferredDate"] = json!("02/11/2026");
    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", payload, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_and_listing() {
    let app = test_app();
    let editor = bearer("editor");
    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", booking(), None))
        .await
        .unwrap();
    let id = body_json(resp).await["booking"]["id"].as_str().unwrap().to_string();

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/bookings?id={}", id),
            json!({ "status": "scheduled" }),
            Some(&editor),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "scheduled");

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/bookings?id={}", id),
            json!({ "status": "teleported" }),
            Some(&editor),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/bookings?status=scheduled", Some(&editor)))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["total"], 1);

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/bookings?id={}", ObjectId::new().to_hex()),
            json!({ "status": "completed" }),
            Some(&editor),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

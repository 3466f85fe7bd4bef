mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::*;
use serde_json::json;
use showroom_backend::model::product::Product;
use tower::ServiceExt;

async fn create_category(app: &TestApp, name: &str, kind: &str) -> serde_json::Value {
    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/categories",
            json!({ "name": name, "type": kind }),
            Some(&bearer("editor")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

fn heater_in(category: &str) -> Product {
    Product {
        id: None,
        name: "Electric Water Heater".to_string(),
        model: "EWH-80".to_string(),
        category: category.to_string(),
        capacity: "80 L".to_string(),
        price: 219.0,
        image_url: None,
        description: None,
        features: vec![],
        in_stock: true,
        created_at: Some(Utc::now().to_rfc3339()),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_create_generates_slug_and_lists_by_type() {
    let app = test_app();
    let created = create_category(&app, "Water Heaters", "product").await;
    assert_eq!(created["slug"], "water-heaters");
    assert_eq!(created["type"], "product");
    create_category(&app, "Web Development", "project").await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/categories?type=product", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Water Heaters");
}

#[tokio::test]
async fn test_delete_refused_while_products_use_it() {
    let app = test_app();
    let created = create_category(&app, "Water Heaters", "product").await;
    let id = created["id"].as_str().unwrap().to_string();
    app.products.0.lock().unwrap().push(heater_in("water-heaters"));

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/categories/{}", id), Some(&bearer("editor"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("1 product(s)"));
    assert_eq!(app.categories.0.lock().unwrap().len(), 1);

    app.products.0.lock().unwrap().clear();
    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/categories/{}", id), Some(&bearer("editor"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(app.categories.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_keeps_slug() {
    let app = test_app();
    let created = create_category(&app, "Water Heaters", "product").await;
    let id = created["id"].as_str().unwrap();

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/categories/{}", id),
            json!({ "name": "Heaters", "description": "All heaters" }),
            Some(&bearer("editor")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Heaters");
    assert_eq!(updated["slug"], "water-heaters");
}

#[tokio::test]
async fn test_bad_ids_and_types() {
    let app = test_app();

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/categories/not-an-id", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/categories",
            json!({ "name": "Odd", "type": "gadget" }),
            Some(&bearer("editor")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_project_filed_under_category_name_blocks_delete() {
    let app = test_app();
    let created = create_category(&app, "Web Development", "project").await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            json!({
                "title": "Clinic Booking Portal",
                "description": "Appointments for a dental clinic",
                "category": "Web Development"
            }),
            Some(&bearer("editor")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["category"], "web-development");

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/categories/{}", id), Some(&bearer("editor"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].as_str().unwrap().contains("1 project(s)"));
    assert_eq!(app.categories.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_category_reference_rejected() {
    let app = test_app();
    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            json!({
                "title": "Clinic Booking Portal",
                "description": "Appointments for a dental clinic",
                "category": "no-such-category"
            }),
            Some(&bearer("editor")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.projects.0.lock().unwrap().is_empty());
}

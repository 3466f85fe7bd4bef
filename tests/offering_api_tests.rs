mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

fn offering(title: &str, sort_order: i32, active: bool) -> serde_json::Value {
    json!({
        "title": title,
        "description": "On-site work by certified technicians",
        "features": ["Warranty"],
        "startingPrice": 49.0,
        "priceUnit": "per visit",
        "deliveryTime": "1-3 days",
        "active": active,
        "sortOrder": sort_order
    })
}

#[tokio::test]
async fn test_list_sorted_and_filtered_by_active() {
    let app = test_app();
    let editor = bearer("editor");
    for payload in [
        offering("Maintenance Plan", 2, true),
        offering("Installation", 1, true),
        offering("Legacy Repairs", 3, false),
    ] {
        let resp = app
            .router
            .clone()
            .oneshot(json_request("POST", "/api/services", payload, Some(&editor)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/services?active=true", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_json(resp).await;
    assert_eq!(page["total"], 2);
    let slugs: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["installation", "maintenance-plan"]);
}

#[tokio::test]
async fn test_explicit_slug_is_normalized() {
    let app = test_app();
    let mut payload = offering("Installation", 1, true);
    payload["slug"] = json!("pro-install");

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/services", payload, Some(&bearer("editor"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/services/pro-install", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["title"], "Installation");
}

#[tokio::test]
async fn test_title_change_keeps_slug() {
    let app = test_app();
    let editor = bearer("editor");
    app.router
        .clone()
        .oneshot(json_request("POST", "/api/services", offering("Installation", 1, true), Some(&editor)))
        .await
        .unwrap();

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/services/installation",
            json!({ "title": "Professional Installation", "active": false }),
            Some(&editor),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["slug"], "installation");
    assert_eq!(updated["active"], false);
}

#[tokio::test]
async fn test_delete_missing_service_is_404() {
    let app = test_app();
    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/api/services/nothing-here", Some(&bearer("admin"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

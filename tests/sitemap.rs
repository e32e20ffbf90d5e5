//! Tests for the root sitemap and the route table behind it.

mod common;

use axum::http::{Method, StatusCode, header::CONTENT_TYPE};
use common::{body_bytes, build_test_app, get, send};
use holonet_backend::routes::ROUTES;
use serde_json::json;

#[tokio::test]
async fn root_lists_parameterless_get_routes() {
    let app = build_test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    for path in ["/user", "/people", "/planet", "/favorite"] {
        assert!(html.contains(&format!("<a href=\"{path}\">")), "missing link for {path}");
    }
    assert!(html.contains("POST /favorite/planet/{id}"));
}

#[tokio::test]
async fn every_listed_route_is_served() {
    let app = build_test_app().await;

    for route in ROUTES {
        let method = Method::from_bytes(route.method.as_bytes()).unwrap();
        let uri = route.path.replace("{id}", "1");
        let response = send(&app, method, &uri, Some(json!({}))).await;
        let status = response.status();

        assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", route.method, route.path);
        // 路由未注册时 axum 返回空 404
        if status == StatusCode::NOT_FOUND {
            assert!(!body_bytes(response).await.is_empty(), "{} {}", route.method, route.path);
        }
    }
}

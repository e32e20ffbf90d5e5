#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use holonet_backend::{AppState, config::Config, database, routes};

/// Application state over a fresh, migrated in-memory store.
pub async fn build_test_state() -> AppState {
    let config = Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .unwrap();

    let pool = database::connect(&config).await.unwrap();
    database::run_migrations(&pool, config.backend).await.unwrap();

    AppState { pool, config }
}

/// Builds the full application over a fresh, migrated in-memory store.
pub async fn build_test_app() -> Router {
    routes::app(build_test_state().await)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Sends a request and returns its status with the parsed JSON body.
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_user(app: &Router, email: &str) -> Value {
    let body = serde_json::json!({
        "user_name": email.split('@').next().unwrap(),
        "email": email,
        "password": "hunter2",
    });
    let response = post_json(app, "/user", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["user"].clone()
}

pub async fn create_person(app: &Router, name: &str, description: &str) -> Value {
    let body = serde_json::json!({"name": name, "description": description});
    let response = post_json(app, "/people", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["people"].clone()
}

pub async fn create_planet(app: &Router, name: &str, climate: &str) -> Value {
    let body = serde_json::json!({"name": name, "climate": climate});
    let response = post_json(app, "/planet", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["planet"].clone()
}

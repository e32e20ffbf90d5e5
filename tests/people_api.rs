//! HTTP-level tests for the `/people` endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, call, create_person, create_user, post_json};
use serde_json::json;

#[tokio::test]
async fn created_person_is_refetchable_by_id() {
    let app = build_test_app().await;
    let person = create_person(&app, "Yoda", "Jedi Master").await;
    assert_eq!(person["name"], "Yoda");
    assert_eq!(person["description"], "Jedi Master");

    let (status, json) = call(&app, Method::GET, &format!("/people/{}", person["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"people": person}));
}

#[tokio::test]
async fn list_people_is_wrapped() {
    let app = build_test_app().await;
    let yoda = create_person(&app, "Yoda", "Jedi Master").await;
    let rey = create_person(&app, "Rey", "Scavenger").await;

    let (status, json) = call(&app, Method::GET, "/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"people": [yoda, rey]}));
}

#[tokio::test]
async fn duplicate_name_fails_at_the_store() {
    let app = build_test_app().await;
    create_person(&app, "Yoda", "Jedi Master").await;

    let response = post_json(&app, "/people", json!({"name": "Yoda", "description": "Again"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_description_is_a_server_error() {
    let app = build_test_app().await;

    let response = post_json(&app, "/people", json!({"name": "Finn"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "missing field `description` in request body"})
    );
}

#[tokio::test]
async fn get_missing_person_returns_200_with_msg() {
    let app = build_test_app().await;

    let (status, json) = call(&app, Method::GET, "/people/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"msg": "Id not exist!"}));
}

#[tokio::test]
async fn delete_person_returns_the_deleted_record() {
    let app = build_test_app().await;
    let person = create_person(&app, "Jar Jar", "Gungan").await;
    let uri = format!("/people/{}", person["id"]);

    let (status, json) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"people": person}));

    let (status, json) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "People not found"}));
}

#[tokio::test]
async fn delete_person_clears_references_from_favorites() {
    let app = build_test_app().await;
    let user = create_user(&app, "ahsoka@shili.org").await;
    let person = create_person(&app, "Anakin", "Padawan").await;

    let response = post_json(
        &app,
        &format!("/favorite/people/{}", person["id"]),
        json!({"user_id": user["id"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let (status, json) = call(&app, Method::DELETE, &format!("/people/{}", person["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"people": person}));

    let (_, favorites) = call(&app, Method::GET, "/favorite", None).await;
    assert_eq!(favorites[0]["people"], json!(null));
    assert_eq!(favorites[0]["user_id"], user["id"]);
}

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, common::Message, error::AppResult, routes::user::User};

use super::model::{Favorite, FavoriteListResponse, FavoriteRequest, FavoriteResponse, FavoriteTarget};

const USER_ID_REQUIRED: &str = "User ID is required.";
const USER_NOT_FOUND: &str = "User not found.";

// 请求体无法解析时同样视为未提供 user_id
fn requested_user_id(body: Result<Json<FavoriteRequest>, JsonRejection>) -> Option<i64> {
    match body {
        Ok(Json(req)) => req.user_id(),
        Err(rejection) => {
            tracing::debug!("Unreadable favorite request body: {}", rejection);
            None
        }
    }
}

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(Message::text(msg))).into_response()
}

pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = Favorite::list(&state.pool).await?;
    Ok(Json(favorites))
}

pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Response> {
    if !User::exists(&state.pool, user_id).await? {
        return Ok(message(StatusCode::NOT_FOUND, USER_NOT_FOUND));
    }

    let favorite = Favorite::list_for_user(&state.pool, user_id).await?;
    if favorite.is_empty() {
        return Ok(message(
            StatusCode::NOT_FOUND,
            "No favorites found for the specified user.",
        ));
    }

    Ok(Json(FavoriteListResponse { favorite }).into_response())
}

pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
    body: Result<Json<FavoriteRequest>, JsonRejection>,
) -> AppResult<Response> {
    add_favorite(&state, requested_user_id(body), FavoriteTarget::People(people_id)).await
}

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    body: Result<Json<FavoriteRequest>, JsonRejection>,
) -> AppResult<Response> {
    add_favorite(&state, requested_user_id(body), FavoriteTarget::Planet(planet_id)).await
}

async fn add_favorite(
    state: &AppState,
    user_id: Option<i64>,
    target: FavoriteTarget,
) -> AppResult<Response> {
    let Some(user_id) = user_id else {
        return Ok(message(StatusCode::BAD_REQUEST, USER_ID_REQUIRED));
    };

    if !User::exists(&state.pool, user_id).await? {
        return Ok(message(StatusCode::NOT_FOUND, USER_NOT_FOUND));
    }

    let favorite = Favorite::create(&state.pool, user_id, target).await?;
    Ok((StatusCode::CREATED, Json(FavoriteResponse { favorite })).into_response())
}

pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    body: Result<Json<FavoriteRequest>, JsonRejection>,
) -> AppResult<Response> {
    remove_favorite(
        &state,
        requested_user_id(body),
        FavoriteTarget::Planet(planet_id),
        "This planet is not in your favorites list.",
    )
    .await
}

pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
    body: Result<Json<FavoriteRequest>, JsonRejection>,
) -> AppResult<Response> {
    remove_favorite(
        &state,
        requested_user_id(body),
        FavoriteTarget::People(people_id),
        "This people is not in your favorites list.",
    )
    .await
}

async fn remove_favorite(
    state: &AppState,
    user_id: Option<i64>,
    target: FavoriteTarget,
    not_listed: &str,
) -> AppResult<Response> {
    let Some(user_id) = user_id else {
        return Ok(message(StatusCode::BAD_REQUEST, USER_ID_REQUIRED));
    };

    let Some(favorite) = Favorite::find_for_user(&state.pool, user_id, target).await? else {
        return Ok(message(StatusCode::NOT_FOUND, not_listed));
    };

    Favorite::delete(&state.pool, favorite.id).await?;
    tracing::info!("User {} removed favorite {}", user_id, favorite.id);

    // 返回被删除记录的序列化结果
    Ok(Json(Message { msg: favorite }).into_response())
}

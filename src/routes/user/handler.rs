use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    common::{ErrorMessage, Message},
    error::{AppResult, require},
};

use super::model::{CreateUserRequest, User, UserResponse};

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = User::list(&state.pool).await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user_name = require(req.user_name, "user_name")?;
    let email = require(req.email, "email")?;
    let password = require(req.password, "password")?;

    let user = User::create(&state.pool, user_name.as_deref(), &email, &password).await?;
    Ok(Json(UserResponse { user }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Response> {
    tracing::debug!("Looking up user {}", user_id);

    // 与其它接口不同，未找到也返回 200
    let response = match User::find_by_id(&state.pool, user_id).await? {
        Some(user) => Json(UserResponse { user }).into_response(),
        None => Json(Message::text("Id not exist")).into_response(),
    };
    Ok(response)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Response> {
    let response = if User::delete(&state.pool, user_id).await? {
        Json(Message::text("Deleted User")).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::text("User not found")),
        )
            .into_response()
    };
    Ok(response)
}

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

use super::model::{CreatePersonRequest, PeopleListResponse, Person, PersonResponse};

pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<PeopleListResponse>> {
    let people = Person::list(&state.pool).await?;
    Ok(Json(PeopleListResponse { people }))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> AppResult<Json<PersonResponse>> {
    let name = require(req.name, "name")?;
    let description = require(req.description, "description")?;

    let people = Person::create(&state.pool, &name, &description).await?;
    Ok(Json(PersonResponse { people }))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> AppResult<Response> {
    tracing::debug!("Looking up person {}", people_id);

    // 未找到时仍返回 200
    let response = match Person::find_by_id(&state.pool, people_id).await? {
        Some(people) => Json(PersonResponse { people }).into_response(),
        None => Json(Message::text("Id not exist!")).into_response(),
    };
    Ok(response)
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> AppResult<Response> {
    let response = match Person::delete(&state.pool, people_id).await? {
        Some(people) => Json(PersonResponse { people }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::text("People not found")),
        )
            .into_response(),
    };
    Ok(response)
}

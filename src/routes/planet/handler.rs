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

use super::model::{CreatePlanetRequest, Planet, PlanetListResponse, PlanetResponse};

pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<PlanetListResponse>> {
    let planet = Planet::list(&state.pool).await?;
    Ok(Json(PlanetListResponse { planet }))
}

pub async fn create_planet(
    State(state): State<AppState>,
    Json(req): Json<CreatePlanetRequest>,
) -> AppResult<Json<PlanetResponse>> {
    let name = require(req.name, "name")?;
    let climate = require(req.climate, "climate")?;

    let planet = Planet::create(&state.pool, &name, &climate).await?;
    Ok(Json(PlanetResponse { planet }))
}

pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> AppResult<Response> {
    tracing::debug!("Looking up planet {}", planet_id);

    let response = match Planet::find_by_id(&state.pool, planet_id).await? {
        Some(planet) => Json(PlanetResponse { planet }).into_response(),
        None => Json(Message::text("Id not exist!")).into_response(),
    };
    Ok(response)
}

pub async fn delete_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> AppResult<Response> {
    let response = match Planet::delete(&state.pool, planet_id).await? {
        Some(planet) => Json(PlanetResponse { planet }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::text("Planet not found")),
        )
            .into_response(),
    };
    Ok(response)
}

//! Handlers for the traffic `/stations` resource.

use airdesk_backend::models::station::{Station, StationInput};
use airdesk_backend::repositories::StationRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/traffic/stations
///
/// Inactive stations are hidden unless `?include_inactive=true`.
pub async fn list_stations(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Station>>>> {
    let stations =
        StationRepo::list(&state.traffic, &auth.token, params.include_inactive).await?;
    Ok(Json(DataResponse { data: stations }))
}

/// GET /api/v1/traffic/stations/{id}
pub async fn get_station(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Station>>> {
    let station = StationRepo::get(&state.traffic, &auth.token, id).await?;
    Ok(Json(DataResponse { data: station }))
}

/// POST /api/v1/traffic/stations
pub async fn create_station(
    auth: BearerAuth,
    State(state): State<AppState>,
    Json(input): Json<StationInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Station>>)> {
    input.validate()?;
    let station = StationRepo::create(&state.traffic, &auth.token, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: station })))
}

/// PUT /api/v1/traffic/stations/{id}
pub async fn update_station(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<StationInput>,
) -> AppResult<Json<DataResponse<Station>>> {
    input.validate()?;
    let station = StationRepo::update(&state.traffic, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: station }))
}

/// DELETE /api/v1/traffic/stations/{id}
pub async fn delete_station(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    StationRepo::delete(&state.traffic, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

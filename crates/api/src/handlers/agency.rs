//! Handlers for the traffic `/agencies` resource.

use airdesk_backend::models::agency::{Agency, AgencyInput};
use airdesk_backend::repositories::AgencyRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

pub async fn list_agencies(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Agency>>>> {
    let agencies = AgencyRepo::list(&state.traffic, &auth.token).await?;
    Ok(Json(DataResponse { data: agencies }))
}

pub async fn get_agency(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Agency>>> {
    let agency = AgencyRepo::get(&state.traffic, &auth.token, id).await?;
    Ok(Json(DataResponse { data: agency }))
}

/// POST /api/v1/traffic/agencies
///
/// Rejects a malformed contact email or a commission rate outside 0-100.
pub async fn create_agency(
    auth: BearerAuth,
    State(state): State<AppState>,
    Json(input): Json<AgencyInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Agency>>)> {
    input.validate()?;
    let agency = AgencyRepo::create(&state.traffic, &auth.token, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: agency })))
}

pub async fn update_agency(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<AgencyInput>,
) -> AppResult<Json<DataResponse<Agency>>> {
    input.validate()?;
    let agency = AgencyRepo::update(&state.traffic, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: agency }))
}

pub async fn delete_agency(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    AgencyRepo::delete(&state.traffic, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

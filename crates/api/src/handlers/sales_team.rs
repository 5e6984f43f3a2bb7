//! Handlers for traffic sales teams and their reps.

use airdesk_backend::models::sales_team::{NewSalesRep, SalesRep, SalesTeam, SalesTeamInput};
use airdesk_backend::repositories::SalesTeamRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

pub async fn list_teams(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SalesTeam>>>> {
    let teams = SalesTeamRepo::list(&state.traffic, &auth.token).await?;
    Ok(Json(DataResponse { data: teams }))
}

pub async fn get_team(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<SalesTeam>>> {
    let team = SalesTeamRepo::get(&state.traffic, &auth.token, id).await?;
    Ok(Json(DataResponse { data: team }))
}

pub async fn create_team(
    auth: BearerAuth,
    State(state): State<AppState>,
    Json(input): Json<SalesTeamInput>,
) -> AppResult<(StatusCode, Json<DataResponse<SalesTeam>>)> {
    input.validate()?;
    let team = SalesTeamRepo::create(&state.traffic, &auth.token, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

pub async fn update_team(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<SalesTeamInput>,
) -> AppResult<Json<DataResponse<SalesTeam>>> {
    input.validate()?;
    let team = SalesTeamRepo::update(&state.traffic, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: team }))
}

pub async fn delete_team(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    SalesTeamRepo::delete(&state.traffic, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Reps
// ---------------------------------------------------------------------------

/// POST /api/v1/traffic/sales-teams/{id}/reps
pub async fn add_rep(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(team_id): Path<EntityId>,
    Json(input): Json<NewSalesRep>,
) -> AppResult<(StatusCode, Json<DataResponse<SalesRep>>)> {
    input.validate()?;
    let rep = SalesTeamRepo::add_rep(&state.traffic, &auth.token, team_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rep })))
}

/// DELETE /api/v1/traffic/sales-teams/{id}/reps/{rep_id}
pub async fn remove_rep(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path((team_id, rep_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    SalesTeamRepo::remove_rep(&state.traffic, &auth.token, team_id, rep_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the traffic `/spots` resource.

use airdesk_backend::models::spot::{Spot, SpotUpdate};
use airdesk_backend::repositories::SpotRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/traffic/spots/{id}
pub async fn update_spot(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<SpotUpdate>,
) -> AppResult<Json<DataResponse<Spot>>> {
    input.validate()?;
    let spot = SpotRepo::update(&state.traffic, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: spot }))
}

/// DELETE /api/v1/traffic/spots/{id}
pub async fn delete_spot(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    SpotRepo::delete(&state.traffic, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

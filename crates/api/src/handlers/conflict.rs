//! Handlers for traffic spot conflicts.

use airdesk_backend::models::conflict::{ConflictQuery, SpotConflict};
use airdesk_backend::repositories::ConflictRepo;
use airdesk_core::conflicts::{validate_resolution, ConflictResolution};
use airdesk_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/traffic/conflicts
pub async fn list_conflicts(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(params): Query<ConflictQuery>,
) -> AppResult<Json<DataResponse<Vec<SpotConflict>>>> {
    let conflicts = ConflictRepo::list(&state.traffic, &auth.token, &params).await?;
    Ok(Json(DataResponse { data: conflicts }))
}

/// POST /api/v1/traffic/conflicts/{id}/resolve
///
/// The conflict is re-read first so a resolution naming a spot outside the
/// conflict, or one aimed at an already resolved conflict, is rejected
/// without a write.
pub async fn resolve_conflict(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(resolution): Json<ConflictResolution>,
) -> AppResult<Json<DataResponse<SpotConflict>>> {
    let conflict = ConflictRepo::get(&state.traffic, &auth.token, id).await?;
    validate_resolution(&conflict.status, &conflict.involved_spot_ids(), &resolution)?;

    let resolved = ConflictRepo::resolve(&state.traffic, &auth.token, id, &resolution).await?;
    tracing::info!(conflict_id = id, spot_id = ?resolution.spot_id(), "Conflict resolved");
    Ok(Json(DataResponse { data: resolved }))
}

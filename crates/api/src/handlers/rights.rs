//! Handlers for submission rights permissions.

use airdesk_backend::models::rights::{RightsPermission, RightsToggle};
use airdesk_backend::repositories::RightsRepo;
use airdesk_core::rights::validate_permission;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/music/submissions/{id}/rights
pub async fn list_rights(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<RightsPermission>>>> {
    let rights = RightsRepo::list(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: rights }))
}

/// PUT /api/v1/music/submissions/{id}/rights/{permission}
///
/// Unknown permission names are rejected before the backend is called.
pub async fn set_right(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path((id, permission)): Path<(EntityId, String)>,
    Json(toggle): Json<RightsToggle>,
) -> AppResult<Json<DataResponse<RightsPermission>>> {
    validate_permission(&permission)?;
    let right =
        RightsRepo::set(&state.music, &auth.token, id, &permission, toggle.granted).await?;
    tracing::info!(
        submission_id = id,
        permission = %permission,
        granted = toggle.granted,
        "Rights updated"
    );
    Ok(Json(DataResponse { data: right }))
}

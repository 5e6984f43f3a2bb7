//! Handlers for airplay statistics.

use airdesk_backend::models::statistics::{ArtistStatistics, PlayStatistics};
use airdesk_backend::repositories::PlayStatisticsRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/music/submissions/{id}/statistics
pub async fn submission_statistics(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<PlayStatistics>>> {
    let stats = PlayStatisticsRepo::for_submission(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/music/artists/{id}/statistics
pub async fn artist_statistics(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<ArtistStatistics>>> {
    let stats = PlayStatisticsRepo::for_artist(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: stats }))
}

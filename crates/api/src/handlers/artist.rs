//! Handlers for music artists.

use airdesk_backend::models::artist::{Artist, ArtistAdminUpdate, ArtistProfileUpdate, ArtistQuery};
use airdesk_backend::repositories::ArtistRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::query::clamp_page;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/music/artists
pub async fn list_artists(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(mut params): Query<ArtistQuery>,
) -> AppResult<Json<DataResponse<Vec<Artist>>>> {
    clamp_page(&mut params.limit, &mut params.offset);
    let artists = ArtistRepo::list(&state.music, &auth.token, &params).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// GET /api/v1/music/artists/{id}
pub async fn get_artist(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Artist>>> {
    let artist = ArtistRepo::get(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: artist }))
}

/// PUT /api/v1/music/artists/{id}
///
/// Admin edit; may also toggle `is_verified`.
pub async fn update_artist(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<ArtistAdminUpdate>,
) -> AppResult<Json<DataResponse<Artist>>> {
    input.validate()?;
    let artist = ArtistRepo::update(&state.music, &auth.token, id, &input).await?;
    tracing::info!(artist_id = id, is_verified = ?input.is_verified, "Artist updated");
    Ok(Json(DataResponse { data: artist }))
}

// ---------------------------------------------------------------------------
// Self-service
// ---------------------------------------------------------------------------

/// GET /api/v1/music/artists/me
pub async fn get_my_profile(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Artist>>> {
    let artist = ArtistRepo::me(&state.music, &auth.token).await?;
    Ok(Json(DataResponse { data: artist }))
}

/// PUT /api/v1/music/artists/me
pub async fn update_my_profile(
    auth: BearerAuth,
    State(state): State<AppState>,
    Json(input): Json<ArtistProfileUpdate>,
) -> AppResult<Json<DataResponse<Artist>>> {
    input.validate()?;
    let artist = ArtistRepo::update_me(&state.music, &auth.token, &input).await?;
    Ok(Json(DataResponse { data: artist }))
}

//! Handlers for pushing submissions to LibreTime.
//!
//! The music backend talks to LibreTime; these only trigger and report.

use airdesk_backend::models::libretime::LibreTimeSync;
use airdesk_backend::repositories::{LibreTimeRepo, SubmissionRepo};
use airdesk_core::error::CoreError;
use airdesk_core::review::can_publish;
use airdesk_core::types::EntityId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BearerAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/music/submissions/{id}/libretime
///
/// Only approved (or already published) submissions can be pushed.
pub async fn push_to_libretime(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<(StatusCode, Json<DataResponse<LibreTimeSync>>)> {
    let submission = SubmissionRepo::get(&state.music, &auth.token, id).await?;
    if !can_publish(&submission.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Submission is {}; only approved submissions can be pushed to LibreTime",
            submission.status
        ))));
    }

    let sync = LibreTimeRepo::push(&state.music, &auth.token, id).await?;
    tracing::info!(submission_id = id, status = %sync.status, "LibreTime push requested");
    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: sync })))
}

/// GET /api/v1/music/submissions/{id}/libretime
pub async fn libretime_status(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<LibreTimeSync>>> {
    let sync = LibreTimeRepo::status(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: sync }))
}

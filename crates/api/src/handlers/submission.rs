//! Handlers for music submissions: listing, MP3 upload, review, ISRC, and
//! audio playback.

use airdesk_backend::models::submission::{
    IsrcAssignment, ReviewRequest, Submission, SubmissionMetadata, SubmissionQuery,
};
use airdesk_backend::repositories::submission_repo::AudioUpload;
use airdesk_backend::repositories::SubmissionRepo;
use airdesk_core::error::CoreError;
use airdesk_core::review::{can_review, validate_review, validate_status};
use airdesk_core::types::EntityId;
use airdesk_core::upload::{
    validate_audio_file, validate_audio_size, validate_audio_upload, MAX_AUDIO_UPLOAD_BYTES,
};
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::{ACCEPT, IF_RANGE, RANGE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::proxy::relay_response;
use crate::middleware::auth::BearerAuth;
use crate::query::clamp_page;
use crate::response::DataResponse;
use crate::state::AppState;

/// Content type assumed when the file part does not declare one.
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/music/submissions
///
/// Admin listing across all artists. The backend call is abandoned after
/// eight seconds and answered with 504.
pub async fn list_submissions(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(mut params): Query<SubmissionQuery>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    if let Some(status) = params.status.as_deref() {
        validate_status(status)?;
    }
    clamp_page(&mut params.limit, &mut params.offset);

    let submissions = SubmissionRepo::list(&state.music, &auth.token, &params).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/music/submissions/mine
pub async fn list_my_submissions(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let submissions = SubmissionRepo::list_mine(&state.music, &auth.token).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/music/submissions/{id}
pub async fn get_submission(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let submission = SubmissionRepo::get(&state.music, &auth.token, id).await?;
    Ok(Json(DataResponse { data: submission }))
}

/// DELETE /api/v1/music/submissions/{id}
pub async fn delete_submission(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    SubmissionRepo::delete(&state.music, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

/// POST /api/v1/music/submissions
///
/// Multipart form with `title`, optional `genre` and `description`, and a
/// `file` part holding the MP3. The file's name and type are checked as
/// soon as its part starts and its size while it is read, so nothing is
/// sent to the backend unless the whole upload passes.
pub async fn upload_submission(
    auth: BearerAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Submission>>)> {
    let mut metadata = SubmissionMetadata::default();
    let mut audio: Option<AudioUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => metadata.title = field.text().await.map_err(multipart_error)?,
            "genre" => metadata.genre = non_empty(field.text().await.map_err(multipart_error)?),
            "description" => {
                metadata.description = non_empty(field.text().await.map_err(multipart_error)?)
            }
            "file" => audio = Some(read_audio(field).await?),
            other => tracing::debug!(field = other, "Ignoring unknown upload field"),
        }
    }

    metadata.validate()?;
    let audio = audio.ok_or_else(|| {
        AppError::Core(CoreError::Validation("An MP3 file is required".into()))
    })?;
    validate_audio_upload(&audio.filename, Some(&audio.content_type), audio.size_bytes)?;

    let size_bytes = audio.size_bytes;
    let submission = SubmissionRepo::upload(&state.music, &auth.token, &metadata, audio).await?;

    tracing::info!(
        submission_id = submission.id,
        title = %submission.title,
        size_bytes,
        "Submission uploaded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// Read the `file` part into memory, rejecting it as soon as it is known
/// to be unacceptable.
async fn read_audio(mut field: Field<'_>) -> AppResult<AudioUpload> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("The file part must carry a filename".into()))?;
    let content_type = field
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_AUDIO_CONTENT_TYPE.to_string());
    validate_audio_file(&filename, Some(&content_type))?;

    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        data.extend_from_slice(&chunk);
        if data.len() as u64 > MAX_AUDIO_UPLOAD_BYTES {
            validate_audio_size(data.len() as u64)?;
        }
    }

    Ok(AudioUpload {
        filename,
        content_type,
        size_bytes: data.len() as u64,
        body: reqwest::Body::from(data),
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Core(CoreError::Validation(format!(
            "Upload exceeds the {} MB limit",
            MAX_AUDIO_UPLOAD_BYTES / (1024 * 1024)
        )))
    } else {
        AppError::BadRequest(err.body_text())
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// POST /api/v1/music/submissions/{id}/review
///
/// Rejections need notes, and only pending submissions can be reviewed.
pub async fn review_submission(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(review): Json<ReviewRequest>,
) -> AppResult<Json<DataResponse<Submission>>> {
    validate_review(review.decision, review.notes.as_deref())?;

    let current = SubmissionRepo::get(&state.music, &auth.token, id).await?;
    if !can_review(&current.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Submission is already {}",
            current.status
        ))));
    }

    let submission = SubmissionRepo::review(&state.music, &auth.token, id, &review).await?;
    tracing::info!(submission_id = id, status = %submission.status, "Submission reviewed");
    Ok(Json(DataResponse { data: submission }))
}

/// PUT /api/v1/music/submissions/{id}/isrc
pub async fn assign_isrc(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<IsrcAssignment>,
) -> AppResult<Json<DataResponse<Submission>>> {
    input.validate()?;
    let submission = SubmissionRepo::assign_isrc(&state.music, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: submission }))
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

/// GET /api/v1/music/submissions/{id}/audio
///
/// Streams the stored audio. `Range` is passed through so players can seek;
/// the backend's `206 Partial Content` is relayed unchanged.
pub async fn stream_audio(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let mut forwarded = HeaderMap::new();
    for name in [RANGE, IF_RANGE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            forwarded.insert(name, value.clone());
        }
    }

    let response = state
        .music
        .stream(&auth.token, &format!("/submissions/{id}/audio"), forwarded)
        .await?;
    Ok(relay_response(response))
}

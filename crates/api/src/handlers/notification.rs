//! Handlers for the traffic `/notifications` resource.
//!
//! Notifications change often, so none of these reads are cached.

use airdesk_backend::models::notification::{Notification, NotificationQuery, UnreadCount};
use airdesk_backend::repositories::NotificationRepo;
use airdesk_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::BearerAuth;
use crate::query::clamp_page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/traffic/notifications
pub async fn list_notifications(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(mut params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    clamp_page(&mut params.limit, &mut params.offset);
    let notifications = NotificationRepo::list(&state.traffic, &auth.token, &params).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /api/v1/traffic/notifications/unread-count
pub async fn unread_count(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UnreadCount>>> {
    let count = NotificationRepo::unread_count(&state.traffic, &auth.token).await?;
    Ok(Json(DataResponse { data: count }))
}

/// POST /api/v1/traffic/notifications/{id}/read
pub async fn mark_read(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    NotificationRepo::mark_read(&state.traffic, &auth.token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/traffic/notifications/read-all
///
/// Relays whatever summary the backend returns (e.g. `{"marked_read": 3}`).
pub async fn mark_all_read(
    auth: BearerAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let summary = NotificationRepo::mark_all_read(&state.traffic, &auth.token).await?;
    Ok(Json(DataResponse { data: summary }))
}

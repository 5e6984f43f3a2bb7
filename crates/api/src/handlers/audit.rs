//! Handler for the traffic audit log.

use airdesk_backend::models::audit::{AuditLog, AuditQuery};
use airdesk_backend::repositories::AuditLogRepo;
use airdesk_core::error::CoreError;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BearerAuth;
use crate::query::clamp_page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/traffic/audit-logs
///
/// Filters: `user`, `action`, `entity_type`, `entity_id`, `from`, `to`,
/// `limit`, `offset`.
pub async fn query_audit_logs(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(mut params): Query<AuditQuery>,
) -> AppResult<Json<DataResponse<Vec<AuditLog>>>> {
    if let (Some(from), Some(to)) = (params.from, params.to) {
        if to < from {
            return Err(AppError::Core(CoreError::Validation(
                "`to` must not be before `from`".into(),
            )));
        }
    }
    clamp_page(&mut params.limit, &mut params.offset);

    let logs = AuditLogRepo::query(&state.traffic, &auth.token, &params).await?;
    Ok(Json(DataResponse { data: logs }))
}

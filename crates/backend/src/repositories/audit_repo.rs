//! Repository for traffic `/audit-logs`.

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::audit::{AuditLog, AuditQuery};
use crate::token::BearerToken;

/// Read-only access to the audit log.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Query audit entries with filters and pagination.
    pub async fn query(
        client: &BackendClient,
        token: &BearerToken,
        query: &AuditQuery,
    ) -> Result<Vec<AuditLog>, BackendError> {
        client
            .get_json_cached(token, "/audit-logs", &query.to_pairs())
            .await
    }
}

//! Repository for traffic `/notifications`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::notification::{Notification, NotificationQuery, UnreadCount};
use crate::token::BearerToken;

/// Notifications are always read live; a stale unread badge is worse than
/// an extra request.
pub struct NotificationRepo;

impl NotificationRepo {
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, BackendError> {
        client
            .get_json(token, "/notifications", &query.to_pairs())
            .await
    }

    pub async fn unread_count(
        client: &BackendClient,
        token: &BearerToken,
    ) -> Result<UnreadCount, BackendError> {
        client
            .get_json(token, "/notifications/unread-count", &[])
            .await
    }

    /// Mark one notification as read.
    pub async fn mark_read(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client
            .post_empty::<serde_json::Value>(token, &format!("/notifications/{id}/read"))
            .await?;
        Ok(())
    }

    /// Mark every notification as read, returning the backend's summary.
    pub async fn mark_all_read(
        client: &BackendClient,
        token: &BearerToken,
    ) -> Result<serde_json::Value, BackendError> {
        client.post_empty(token, "/notifications/read-all").await
    }
}

//! Operator notifications.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use super::QueryPairs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Unread counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}

/// Filters for listing notifications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationQuery {
    pub unread_only: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl NotificationQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("unread_only", self.unread_only)
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .into_vec()
    }
}

//! Audit log entries.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use super::QueryPairs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: EntityId,
    #[serde(default)]
    pub user: Option<String>,
    pub action: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// Filters for querying the audit log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub user: Option<String>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<EntityId>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl AuditQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("user", self.user.as_deref())
            .opt("action", self.action.as_deref())
            .opt("entity_type", self.entity_type.as_deref())
            .opt("entity_id", self.entity_id)
            .opt("from", self.from.map(|t| t.to_rfc3339()))
            .opt("to", self.to.map(|t| t.to_rfc3339()))
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .into_vec()
    }
}

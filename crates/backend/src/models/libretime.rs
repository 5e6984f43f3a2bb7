//! LibreTime synchronisation state for a submission.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreTimeSync {
    pub submission_id: EntityId,
    #[serde(default)]
    pub libretime_file_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub synced_at: Option<Timestamp>,
    #[serde(default)]
    pub error: Option<String>,
}

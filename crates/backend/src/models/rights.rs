//! Per-submission rights permissions.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RightsPermission {
    pub submission_id: EntityId,
    pub permission: String,
    pub granted: bool,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Body of a toggle request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RightsToggle {
    pub granted: bool,
}

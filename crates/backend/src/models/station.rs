//! Broadcast stations.

use airdesk_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: EntityId,
    pub call_sign: String,
    pub name: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// DTO for creating or replacing a station.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationInput {
    #[validate(length(min = 1, max = 10))]
    pub call_sign: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 20))]
    pub frequency: Option<String>,
    #[validate(length(max = 100))]
    pub market: Option<String>,
    #[validate(length(max = 64))]
    pub timezone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

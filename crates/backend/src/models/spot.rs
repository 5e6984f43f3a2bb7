//! Scheduled spots.

use airdesk_core::spots::SpotDraft;
use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A spot as stored by the traffic backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub id: EntityId,
    pub order_id: EntityId,
    #[serde(default)]
    pub station_id: Option<EntityId>,
    pub scheduled_at: Timestamp,
    pub duration_seconds: i32,
    pub status: String,
    #[serde(default)]
    pub conflict_id: Option<EntityId>,
}

/// Payload for creating many spots in one call.
#[derive(Debug, Clone, Serialize)]
pub struct SpotBatch {
    pub order_id: EntityId,
    pub spots: Vec<SpotDraft>,
}

/// DTO for editing a single spot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SpotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3600))]
    pub duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

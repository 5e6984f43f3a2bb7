//! Spot conflicts reported by the traffic backend.

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use super::spot::Spot;
use super::QueryPairs;

/// Two or more spots colliding on a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotConflict {
    pub id: EntityId,
    #[serde(default)]
    pub station_id: Option<EntityId>,
    pub scheduled_at: Timestamp,
    #[serde(default)]
    pub spot_ids: Vec<EntityId>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: String,
    /// Expanded spot records, when the backend includes them.
    #[serde(default)]
    pub spots: Vec<Spot>,
}

impl SpotConflict {
    /// Ids of every spot in the conflict, from either representation.
    pub fn involved_spot_ids(&self) -> Vec<EntityId> {
        let mut ids = self.spot_ids.clone();
        for spot in &self.spots {
            if !ids.contains(&spot.id) {
                ids.push(spot.id);
            }
        }
        ids
    }
}

/// Filters for listing conflicts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConflictQuery {
    pub status: Option<String>,
    pub station_id: Option<EntityId>,
}

impl ConflictQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("status", self.status.as_deref())
            .opt("station_id", self.station_id)
            .into_vec()
    }
}

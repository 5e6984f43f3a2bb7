//! Airplay statistics.

use std::collections::BTreeMap;

use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Play counts for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayStatistics {
    pub submission_id: EntityId,
    #[serde(default)]
    pub total_plays: i64,
    #[serde(default)]
    pub last_played_at: Option<Timestamp>,
    /// Plays keyed by station call sign.
    #[serde(default)]
    pub plays_by_station: BTreeMap<String, i64>,
}

/// Play counts across an artist's catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistStatistics {
    pub artist_id: EntityId,
    #[serde(default)]
    pub total_plays: i64,
    #[serde(default)]
    pub submissions: Vec<PlayStatistics>,
}

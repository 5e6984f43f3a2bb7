//! Music submissions and their review.

use airdesk_core::review::ReviewDecision;
use airdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::QueryPairs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: EntityId,
    pub artist_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub isrc: Option<String>,
    pub status: String,
    #[serde(default)]
    pub review_notes: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<Timestamp>,
}

/// Text fields sent alongside the audio file of a new submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmissionMetadata {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 100))]
    pub genre: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// An admin's review of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
    #[serde(default)]
    pub notes: Option<String>,
}

/// ISRC assigned by an admin. The code is forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IsrcAssignment {
    #[validate(length(min = 1, max = 32))]
    pub isrc: String,
}

/// Filters for submission listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionQuery {
    pub status: Option<String>,
    pub artist_id: Option<EntityId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl SubmissionQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .opt("status", self.status.as_deref())
            .opt("artist_id", self.artist_id)
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .into_vec()
    }
}

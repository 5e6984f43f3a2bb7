//! Repository for music play statistics.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::statistics::{ArtistStatistics, PlayStatistics};
use crate::token::BearerToken;

pub struct PlayStatisticsRepo;

impl PlayStatisticsRepo {
    pub async fn for_submission(
        client: &BackendClient,
        token: &BearerToken,
        submission_id: EntityId,
    ) -> Result<PlayStatistics, BackendError> {
        client
            .get_json_cached(
                token,
                &format!("/submissions/{submission_id}/statistics"),
                &[],
            )
            .await
    }

    pub async fn for_artist(
        client: &BackendClient,
        token: &BearerToken,
        artist_id: EntityId,
    ) -> Result<ArtistStatistics, BackendError> {
        client
            .get_json_cached(token, &format!("/artists/{artist_id}/statistics"), &[])
            .await
    }
}

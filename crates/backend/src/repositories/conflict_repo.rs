//! Repository for traffic `/conflicts`.

use airdesk_core::conflicts::ConflictResolution;
use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::conflict::{ConflictQuery, SpotConflict};
use crate::token::BearerToken;

pub struct ConflictRepo;

impl ConflictRepo {
    /// List conflicts. Not cached: conflicts change whenever spots do.
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        query: &ConflictQuery,
    ) -> Result<Vec<SpotConflict>, BackendError> {
        client
            .get_json(token, "/conflicts", &query.to_pairs())
            .await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<SpotConflict, BackendError> {
        client
            .get_json(token, &format!("/conflicts/{id}"), &[])
            .await
    }

    /// Apply an operator's resolution. Moves or removes spots backend-side.
    pub async fn resolve(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        resolution: &ConflictResolution,
    ) -> Result<SpotConflict, BackendError> {
        let conflict: SpotConflict = client
            .post_json(token, &format!("/conflicts/{id}/resolve"), resolution)
            .await?;
        client.cache().invalidate_resource("/spots");
        Ok(conflict)
    }
}

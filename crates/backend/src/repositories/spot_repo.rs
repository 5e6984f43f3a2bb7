//! Repository for traffic `/spots`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::spot::{Spot, SpotBatch, SpotUpdate};
use crate::token::BearerToken;

/// Provides write operations for spots. Spots are read through
/// [`OrderRepo::list_spots`](super::OrderRepo::list_spots).
pub struct SpotRepo;

impl SpotRepo {
    /// Submit a whole batch of spots in one call.
    ///
    /// The backend accepts or rejects the batch as a unit.
    pub async fn create_batch(
        client: &BackendClient,
        token: &BearerToken,
        batch: &SpotBatch,
    ) -> Result<Vec<Spot>, BackendError> {
        client.post_json(token, "/spots/batch", batch).await
    }

    /// Edit one spot.
    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &SpotUpdate,
    ) -> Result<Spot, BackendError> {
        client
            .put_json(token, &format!("/spots/{id}"), input)
            .await
    }

    /// Delete one spot.
    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/spots/{id}")).await
    }
}

//! Repository for traffic `/stations`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::station::{Station, StationInput};
use crate::token::BearerToken;

/// Provides CRUD operations for stations.
pub struct StationRepo;

impl StationRepo {
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        include_inactive: bool,
    ) -> Result<Vec<Station>, BackendError> {
        let query = [("include_inactive", include_inactive.to_string())];
        client.get_json_cached(token, "/stations", &query).await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Station, BackendError> {
        client
            .get_json_cached(token, &format!("/stations/{id}"), &[])
            .await
    }

    pub async fn create(
        client: &BackendClient,
        token: &BearerToken,
        input: &StationInput,
    ) -> Result<Station, BackendError> {
        client.post_json(token, "/stations", input).await
    }

    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &StationInput,
    ) -> Result<Station, BackendError> {
        client
            .put_json(token, &format!("/stations/{id}"), input)
            .await
    }

    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/stations/{id}")).await
    }
}

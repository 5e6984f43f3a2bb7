//! Repository for traffic `/agencies`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::agency::{Agency, AgencyInput};
use crate::token::BearerToken;

/// Provides CRUD operations for agencies.
pub struct AgencyRepo;

impl AgencyRepo {
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
    ) -> Result<Vec<Agency>, BackendError> {
        client.get_json_cached(token, "/agencies", &[]).await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Agency, BackendError> {
        client
            .get_json_cached(token, &format!("/agencies/{id}"), &[])
            .await
    }

    pub async fn create(
        client: &BackendClient,
        token: &BearerToken,
        input: &AgencyInput,
    ) -> Result<Agency, BackendError> {
        client.post_json(token, "/agencies", input).await
    }

    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &AgencyInput,
    ) -> Result<Agency, BackendError> {
        client
            .put_json(token, &format!("/agencies/{id}"), input)
            .await
    }

    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/agencies/{id}")).await
    }
}

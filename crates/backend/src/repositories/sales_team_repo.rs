//! Repository for traffic `/sales-teams` and their reps.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::sales_team::{NewSalesRep, SalesRep, SalesTeam, SalesTeamInput};
use crate::token::BearerToken;

/// Provides CRUD operations for sales teams and rep membership.
pub struct SalesTeamRepo;

impl SalesTeamRepo {
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
    ) -> Result<Vec<SalesTeam>, BackendError> {
        client.get_json_cached(token, "/sales-teams", &[]).await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<SalesTeam, BackendError> {
        client
            .get_json_cached(token, &format!("/sales-teams/{id}"), &[])
            .await
    }

    pub async fn create(
        client: &BackendClient,
        token: &BearerToken,
        input: &SalesTeamInput,
    ) -> Result<SalesTeam, BackendError> {
        client.post_json(token, "/sales-teams", input).await
    }

    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &SalesTeamInput,
    ) -> Result<SalesTeam, BackendError> {
        client
            .put_json(token, &format!("/sales-teams/{id}"), input)
            .await
    }

    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/sales-teams/{id}")).await
    }

    /// Add a representative to a team.
    pub async fn add_rep(
        client: &BackendClient,
        token: &BearerToken,
        team_id: EntityId,
        input: &NewSalesRep,
    ) -> Result<SalesRep, BackendError> {
        client
            .post_json(token, &format!("/sales-teams/{team_id}/reps"), input)
            .await
    }

    /// Remove a representative from a team.
    pub async fn remove_rep(
        client: &BackendClient,
        token: &BearerToken,
        team_id: EntityId,
        rep_id: EntityId,
    ) -> Result<(), BackendError> {
        client
            .delete(token, &format!("/sales-teams/{team_id}/reps/{rep_id}"))
            .await
    }
}

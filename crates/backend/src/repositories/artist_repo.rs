//! Repository for music `/artists`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::artist::{Artist, ArtistAdminUpdate, ArtistProfileUpdate, ArtistQuery};
use crate::token::BearerToken;

/// Artist profiles, both self-service (`/artists/me`) and admin.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Admin listing.
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        query: &ArtistQuery,
    ) -> Result<Vec<Artist>, BackendError> {
        client
            .get_json_cached(token, "/artists", &query.to_pairs())
            .await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Artist, BackendError> {
        client
            .get_json_cached(token, &format!("/artists/{id}"), &[])
            .await
    }

    /// The caller's own profile.
    pub async fn me(client: &BackendClient, token: &BearerToken) -> Result<Artist, BackendError> {
        client.get_json_cached(token, "/artists/me", &[]).await
    }

    /// Edit the caller's own profile.
    pub async fn update_me(
        client: &BackendClient,
        token: &BearerToken,
        input: &ArtistProfileUpdate,
    ) -> Result<Artist, BackendError> {
        client.put_json(token, "/artists/me", input).await
    }

    /// Admin edit of any profile, including verification.
    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &ArtistAdminUpdate,
    ) -> Result<Artist, BackendError> {
        client
            .put_json(token, &format!("/artists/{id}"), input)
            .await
    }
}

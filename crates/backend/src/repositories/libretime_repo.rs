//! Repository for the backend's LibreTime integration endpoints.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::libretime::LibreTimeSync;
use crate::token::BearerToken;

pub struct LibreTimeRepo;

impl LibreTimeRepo {
    /// Ask the backend to push an approved submission to LibreTime.
    pub async fn push(
        client: &BackendClient,
        token: &BearerToken,
        submission_id: EntityId,
    ) -> Result<LibreTimeSync, BackendError> {
        client
            .post_empty(token, &format!("/submissions/{submission_id}/libretime"))
            .await
    }

    /// Current synchronisation state. Never cached.
    pub async fn status(
        client: &BackendClient,
        token: &BearerToken,
        submission_id: EntityId,
    ) -> Result<LibreTimeSync, BackendError> {
        client
            .get_json(token, &format!("/submissions/{submission_id}/libretime"), &[])
            .await
    }
}

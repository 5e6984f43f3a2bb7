//! Repository for music `/submissions/{id}/rights`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::rights::{RightsPermission, RightsToggle};
use crate::token::BearerToken;

pub struct RightsRepo;

impl RightsRepo {
    /// Every permission flag for a submission.
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        submission_id: EntityId,
    ) -> Result<Vec<RightsPermission>, BackendError> {
        client
            .get_json_cached(token, &format!("/submissions/{submission_id}/rights"), &[])
            .await
    }

    /// Grant or revoke one permission.
    pub async fn set(
        client: &BackendClient,
        token: &BearerToken,
        submission_id: EntityId,
        permission: &str,
        granted: bool,
    ) -> Result<RightsPermission, BackendError> {
        client
            .put_json(
                token,
                &format!("/submissions/{submission_id}/rights/{permission}"),
                &RightsToggle { granted },
            )
            .await
    }
}

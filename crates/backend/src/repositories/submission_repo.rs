//! Repository for music `/submissions`.

use std::time::Duration;

use airdesk_core::types::EntityId;
use reqwest::multipart::{Form, Part};

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::submission::{
    IsrcAssignment, ReviewRequest, Submission, SubmissionMetadata, SubmissionQuery,
};
use crate::token::BearerToken;

/// Budget for the admin submission listing, which the backend can be slow
/// to assemble. Other calls use the client default.
pub const ADMIN_LIST_TIMEOUT: Duration = Duration::from_secs(8);

/// An audio file that already passed the upload gate.
#[derive(Debug)]
pub struct AudioUpload {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub body: reqwest::Body,
}

pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Admin listing across all artists. Aborted after [`ADMIN_LIST_TIMEOUT`].
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        query: &SubmissionQuery,
    ) -> Result<Vec<Submission>, BackendError> {
        client
            .get_json_with_timeout(token, "/submissions", &query.to_pairs(), ADMIN_LIST_TIMEOUT)
            .await
    }

    /// The caller's own submissions.
    pub async fn list_mine(
        client: &BackendClient,
        token: &BearerToken,
    ) -> Result<Vec<Submission>, BackendError> {
        client
            .get_json_cached(token, "/submissions/mine", &[])
            .await
    }

    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Submission, BackendError> {
        client
            .get_json_cached(token, &format!("/submissions/{id}"), &[])
            .await
    }

    /// Create a submission from metadata and an MP3 file in one multipart
    /// request.
    pub async fn upload(
        client: &BackendClient,
        token: &BearerToken,
        metadata: &SubmissionMetadata,
        audio: AudioUpload,
    ) -> Result<Submission, BackendError> {
        let file = Part::stream_with_length(audio.body, audio.size_bytes)
            .file_name(audio.filename)
            .mime_str(&audio.content_type)?;

        let mut form = Form::new().text("title", metadata.title.clone());
        if let Some(genre) = &metadata.genre {
            form = form.text("genre", genre.clone());
        }
        if let Some(description) = &metadata.description {
            form = form.text("description", description.clone());
        }
        let form = form.part("file", file);

        client.post_multipart(token, "/submissions", form).await
    }

    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/submissions/{id}")).await
    }

    /// Record an admin's review decision.
    pub async fn review(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        review: &ReviewRequest,
    ) -> Result<Submission, BackendError> {
        client
            .post_json(token, &format!("/submissions/{id}/review"), review)
            .await
    }

    /// Register an ISRC for a submission.
    pub async fn assign_isrc(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        assignment: &IsrcAssignment,
    ) -> Result<Submission, BackendError> {
        client
            .put_json(token, &format!("/submissions/{id}/isrc"), assignment)
            .await
    }
}

//! Route definitions for the music backend.
//!
//! All endpoints require a bearer token.

use airdesk_core::upload::MAX_AUDIO_UPLOAD_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{artist, libretime, rights, statistics, submission};
use crate::state::AppState;

/// Request body limit of the upload route: the audio cap plus 1 MiB of
/// multipart framing and metadata.
pub const UPLOAD_BODY_LIMIT: usize = MAX_AUDIO_UPLOAD_BYTES as usize + 1024 * 1024;

/// Routes mounted at `/music`.
///
/// ```text
/// GET    /artists                              -> list_artists
/// GET    /artists/me                           -> get_my_profile
/// PUT    /artists/me                           -> update_my_profile
/// GET    /artists/{id}                         -> get_artist
/// PUT    /artists/{id}                         -> update_artist
/// GET    /artists/{id}/statistics              -> artist_statistics
///
/// GET    /submissions                          -> list_submissions
/// POST   /submissions                          -> upload_submission (multipart)
/// GET    /submissions/mine                     -> list_my_submissions
/// GET    /submissions/{id}                     -> get_submission
/// DELETE /submissions/{id}                     -> delete_submission
/// POST   /submissions/{id}/review              -> review_submission
/// PUT    /submissions/{id}/isrc                -> assign_isrc
/// GET    /submissions/{id}/rights              -> list_rights
/// PUT    /submissions/{id}/rights/{permission} -> set_right
/// GET    /submissions/{id}/statistics          -> submission_statistics
/// POST   /submissions/{id}/libretime           -> push_to_libretime
/// GET    /submissions/{id}/libretime           -> libretime_status
/// GET    /submissions/{id}/audio               -> stream_audio
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Artists (`/artists/me` is matched before `/artists/{id}`)
        .route("/artists", get(artist::list_artists))
        .route(
            "/artists/me",
            get(artist::get_my_profile).put(artist::update_my_profile),
        )
        .route(
            "/artists/{id}",
            get(artist::get_artist).put(artist::update_artist),
        )
        .route(
            "/artists/{id}/statistics",
            get(statistics::artist_statistics),
        )
        // Submissions
        .route(
            "/submissions",
            post(submission::upload_submission)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
                .get(submission::list_submissions),
        )
        .route("/submissions/mine", get(submission::list_my_submissions))
        .route(
            "/submissions/{id}",
            get(submission::get_submission).delete(submission::delete_submission),
        )
        .route(
            "/submissions/{id}/review",
            post(submission::review_submission),
        )
        .route("/submissions/{id}/isrc", put(submission::assign_isrc))
        .route("/submissions/{id}/audio", get(submission::stream_audio))
        // Rights, statistics, LibreTime
        .route("/submissions/{id}/rights", get(rights::list_rights))
        .route(
            "/submissions/{id}/rights/{permission}",
            put(rights::set_right),
        )
        .route(
            "/submissions/{id}/statistics",
            get(statistics::submission_statistics),
        )
        .route(
            "/submissions/{id}/libretime",
            post(libretime::push_to_libretime).get(libretime::libretime_status),
        )
}

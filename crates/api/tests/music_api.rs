//! Integration tests for the typed music routes against a mock backend.

mod common;

use std::time::Duration;

use airdesk_api::routes::music::UPLOAD_BODY_LIMIT;
use airdesk_core::upload::MAX_AUDIO_UPLOAD_BYTES;
use axum::http::{Method, StatusCode};
use common::{
    body_json, build_test_app, get_auth, post_multipart, send_json, Part, TestBackends,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json as match_body, method, path};
use wiremock::{Mock, ResponseTemplate};

fn submission_json(id: i64, status: &str) -> Value {
    json!({"id": id, "artist_id": 2, "title": "Night Drive", "status": status})
}

// ---------------------------------------------------------------------------
// Upload gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mp3_upload_is_relayed_as_multipart() {
    let backends = TestBackends::start().await;
    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(submission_json(5, "pending")))
        .expect(1)
        .mount(&backends.music)
        .await;

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[
            Part { name: "title", filename: None, content_type: None, data: b"Night Drive" },
            Part { name: "genre", filename: None, content_type: None, data: b"Synthwave" },
            Part {
                name: "file",
                filename: Some("night-drive.mp3"),
                content_type: Some("audio/mpeg"),
                data: b"ID3fake-mp3-bytes",
            },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["id"], 5);

    let requests = backends.music.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("Synthwave"));
    assert!(body.contains("filename=\"night-drive.mp3\""));
    assert!(body.contains("ID3fake-mp3-bytes"));
}

#[tokio::test]
async fn wav_upload_never_reaches_backend() {
    let backends = TestBackends::start().await;

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[
            Part { name: "title", filename: None, content_type: None, data: b"Night Drive" },
            Part {
                name: "file",
                filename: Some("night-drive.wav"),
                content_type: Some("audio/wav"),
                data: b"RIFF....WAVE",
            },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(backends.music.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let backends = TestBackends::start().await;

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[Part { name: "title", filename: None, content_type: None, data: b"Night Drive" }],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backends.music.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_audio_file_is_rejected() {
    let backends = TestBackends::start().await;

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[
            Part { name: "title", filename: None, content_type: None, data: b"Silence" },
            Part {
                name: "file",
                filename: Some("silence.mp3"),
                content_type: Some("audio/mpeg"),
                data: b"",
            },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backends.music.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn oversize_audio_is_cut_off_before_backend() {
    let backends = TestBackends::start().await;
    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(submission_json(5, "pending")))
        .expect(0)
        .mount(&backends.music)
        .await;
    let data = vec![0u8; MAX_AUDIO_UPLOAD_BYTES as usize + 1];

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[
            Part { name: "title", filename: None, content_type: None, data: b"Long Mix" },
            Part {
                name: "file",
                filename: Some("long-mix.mp3"),
                content_type: Some("audio/mpeg"),
                data: &data,
            },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("the limit is 150 MB"));
}

#[tokio::test]
async fn body_over_route_limit_is_a_validation_error() {
    let backends = TestBackends::start().await;
    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(submission_json(5, "pending")))
        .expect(0)
        .mount(&backends.music)
        .await;
    let description = vec![b'a'; UPLOAD_BODY_LIMIT + 1];

    let response = post_multipart(
        build_test_app(&backends),
        "/api/v1/music/submissions",
        &[
            Part { name: "title", filename: None, content_type: None, data: b"Long Notes" },
            Part { name: "description", filename: None, content_type: None, data: &description },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Upload exceeds the 150 MB limit");
}

// ---------------------------------------------------------------------------
// Review and rights
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejection_without_notes_is_rejected_locally() {
    let backends = TestBackends::start().await;

    let response = send_json(
        build_test_app(&backends),
        Method::POST,
        "/api/v1/music/submissions/5/review",
        json!({"decision": "reject"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backends.music.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn reviewing_an_approved_submission_conflicts() {
    let backends = TestBackends::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "approved")))
        .mount(&backends.music)
        .await;
    Mock::given(method("POST"))
        .and(path("/submissions/5/review"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backends.music)
        .await;

    let response = send_json(
        build_test_app(&backends),
        Method::POST,
        "/api/v1/music/submissions/5/review",
        json!({"decision": "approve"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn approving_a_pending_submission_forwards_decision() {
    let backends = TestBackends::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "pending")))
        .mount(&backends.music)
        .await;
    Mock::given(method("POST"))
        .and(path("/submissions/5/review"))
        .and(match_body(json!({"decision": "approve", "notes": "Great mix"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "approved")))
        .expect(1)
        .mount(&backends.music)
        .await;

    let response = send_json(
        build_test_app(&backends),
        Method::POST,
        "/api/v1/music/submissions/5/review",
        json!({"decision": "approve", "notes": "Great mix"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "approved");
}

#[tokio::test]
async fn unknown_rights_permission_is_rejected() {
    let backends = TestBackends::start().await;

    let response = send_json(
        build_test_app(&backends),
        Method::PUT,
        "/api/v1/music/submissions/5/rights/ringtone_use",
        json!({"granted": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backends.music.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn isrc_is_forwarded_verbatim() {
    let backends = TestBackends::start().await;
    Mock::given(method("PUT"))
        .and(path("/submissions/5/isrc"))
        .and(match_body(json!({"isrc": "us-s1z-99-00001"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "approved")))
        .expect(1)
        .mount(&backends.music)
        .await;

    let response = send_json(
        build_test_app(&backends),
        Method::PUT,
        "/api/v1/music/submissions/5/isrc",
        json!({"isrc": "us-s1z-99-00001"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// LibreTime
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pending_submission_cannot_be_pushed() {
    let backends = TestBackends::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "pending")))
        .mount(&backends.music)
        .await;

    let response = send_json(
        build_test_app(&backends),
        Method::POST,
        "/api/v1/music/submissions/5/libretime",
        json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn artist_me_is_not_treated_as_an_id() {
    let backends = TestBackends::start().await;
    Mock::given(method("GET"))
        .and(path("/artists/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "name": "Neon Coast", "is_verified": false
        })))
        .expect(1)
        .mount(&backends.music)
        .await;

    let response = get_auth(build_test_app(&backends), "/api/v1/music/artists/me").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Neon Coast");
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let backends = TestBackends::start().await;

    let response = get_auth(
        build_test_app(&backends),
        "/api/v1/music/submissions?status=lost",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn slow_admin_listing_times_out() {
    let backends = TestBackends::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&backends.music)
        .await;

    let started = std::time::Instant::now();
    let response = get_auth(build_test_app(&backends), "/api/v1/music/submissions").await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(started.elapsed() < Duration::from_secs(10));
}

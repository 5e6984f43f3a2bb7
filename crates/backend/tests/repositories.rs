//! Integration tests for the repository layer against a mock backend.

use std::time::Duration;

use airdesk_backend::models::order::OrderQuery;
use airdesk_backend::models::spot::SpotBatch;
use airdesk_backend::models::submission::{SubmissionMetadata, SubmissionQuery};
use airdesk_backend::repositories::submission_repo::{AudioUpload, ADMIN_LIST_TIMEOUT};
use airdesk_backend::repositories::{
    ConflictRepo, OrderRepo, RightsRepo, SalesTeamRepo, SpotRepo, SubmissionRepo,
};
use airdesk_backend::{BackendClient, BearerToken};
use airdesk_core::conflicts::ConflictResolution;
use airdesk_core::spots::{generate_naive_spots, SpotRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(
        "test",
        server.uri(),
        Duration::from_secs(5),
        Duration::from_secs(60),
    )
    .unwrap()
}

fn token() -> BearerToken {
    BearerToken::new("t")
}

fn spot_json(id: i64, order_id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "order_id": order_id,
        "scheduled_at": "2024-05-01T06:00:00Z",
        "duration_seconds": 30,
        "status": "scheduled"
    })
}

fn submission_json(id: i64, status: &str) -> serde_json::Value {
    json!({"id": id, "artist_id": 2, "title": "Night Drive", "status": status})
}

#[tokio::test]
async fn order_list_forwards_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("status", "confirmed"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1, "advertiser": "Acme", "start_date": "2024-05-01",
            "end_date": "2024-05-31", "status": "confirmed"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = OrderQuery {
        status: Some("confirmed".into()),
        limit: Some(10),
        ..Default::default()
    };
    let orders = OrderRepo::list(&client, &token(), &query).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].advertiser, "Acme");
}

#[tokio::test]
async fn spot_batch_is_one_call_with_every_draft() {
    let server = MockServer::start().await;
    let request = SpotRequest {
        start_date: "2024-05-01".parse().unwrap(),
        end_date: "2024-05-02".parse().unwrap(),
        cadence_hours: 2,
        duration_seconds: 30,
    };
    let drafts = generate_naive_spots(7, Some(1), &request).unwrap();
    let batch = SpotBatch {
        order_id: 7,
        spots: drafts,
    };

    Mock::given(method("POST"))
        .and(path("/spots/batch"))
        .and(body_json(serde_json::to_value(&batch).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([spot_json(1, 7)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = SpotRepo::create_batch(&client, &token(), &batch).await.unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(batch.spots.len(), 16);
}

#[tokio::test]
async fn resolving_conflict_refreshes_order_spots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/7/spots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([spot_json(1, 7)])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/conflicts/3/resolve"))
        .and(body_json(json!({"action": "keep_spot", "spot_id": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "scheduled_at": "2024-05-01T06:00:00Z",
            "spot_ids": [1, 2], "status": "resolved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    OrderRepo::list_spots(&client, &token(), 7).await.unwrap();
    let conflict = ConflictRepo::resolve(
        &client,
        &token(),
        3,
        &ConflictResolution::KeepSpot { spot_id: 1 },
    )
    .await
    .unwrap();
    OrderRepo::list_spots(&client, &token(), 7).await.unwrap();

    assert_eq!(conflict.status, "resolved");
}

#[tokio::test]
async fn removing_rep_invalidates_team() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sales-teams/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "East"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/sales-teams/2/reps/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    SalesTeamRepo::get(&client, &token(), 2).await.unwrap();
    SalesTeamRepo::remove_rep(&client, &token(), 2, 9).await.unwrap();
    let team = SalesTeamRepo::get(&client, &token(), 2).await.unwrap();
    assert!(team.reps.is_empty());
}

#[tokio::test]
async fn admin_submission_listing_passes_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([submission_json(1, "pending")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = SubmissionQuery {
        status: Some("pending".into()),
        ..Default::default()
    };
    let submissions = SubmissionRepo::list(&client, &token(), &query).await.unwrap();

    assert_eq!(submissions[0].status, "pending");
    assert_eq!(ADMIN_LIST_TIMEOUT, Duration::from_secs(8));
}

#[tokio::test]
async fn upload_sends_metadata_and_file_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(submission_json(5, "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metadata = SubmissionMetadata {
        title: "Night Drive".into(),
        genre: Some("Synthwave".into()),
        description: None,
    };
    let data = b"ID3fake-mp3-bytes".to_vec();
    let audio = AudioUpload {
        filename: "night-drive.mp3".into(),
        content_type: "audio/mpeg".into(),
        size_bytes: data.len() as u64,
        body: reqwest::Body::from(data),
    };

    let created = SubmissionRepo::upload(&client, &token(), &metadata, audio)
        .await
        .unwrap();
    assert_eq!(created.id, 5);

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("Night Drive"));
    assert!(body.contains("filename=\"night-drive.mp3\""));
    assert!(body.contains("ID3fake-mp3-bytes"));
    assert!(!body.contains("name=\"description\""));
}

#[tokio::test]
async fn rights_toggle_puts_granted_flag() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/submissions/5/rights/radio_broadcast"))
        .and(body_json(json!({"granted": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "submission_id": 5, "permission": "radio_broadcast", "granted": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let permission = RightsRepo::set(&client, &token(), 5, "radio_broadcast", false)
        .await
        .unwrap();
    assert!(!permission.granted);
}

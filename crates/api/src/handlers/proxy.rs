//! Raw request proxy to the traffic and music backends.
//!
//! Requests under `/proxy/{backend}/...` are forwarded with their method,
//! path, query string, body, and a fixed set of headers. The backend's
//! status, headers, and body are relayed back unchanged, the body as a
//! stream. Authorization is forwarded as-is and never checked here.

use airdesk_backend::BackendClient;
use airdesk_core::upload::MAX_AUDIO_UPLOAD_BYTES;
use axum::body::Body;
use axum::extract::{OriginalUri, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONNECTION, CONTENT_TYPE, IF_RANGE, RANGE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Mount point of the traffic proxy.
pub const TRAFFIC_PREFIX: &str = "/proxy/traffic";

/// Mount point of the music proxy.
pub const MUSIC_PREFIX: &str = "/proxy/music";

/// Largest request body the proxy buffers: the audio cap plus 1 MiB of
/// multipart framing.
pub const MAX_PROXY_BODY_BYTES: usize = MAX_AUDIO_UPLOAD_BYTES as usize + 1024 * 1024;

/// Response headers that describe a single connection and must not be
/// relayed.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// ANY /proxy/traffic/{*path}
pub async fn proxy_traffic(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let target = backend_target(uri.path(), uri.query(), TRAFFIC_PREFIX);
    forward(&state.traffic, method, &target, &headers, body).await
}

/// ANY /proxy/music/{*path}
pub async fn proxy_music(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let target = backend_target(uri.path(), uri.query(), MUSIC_PREFIX);
    forward(&state.music, method, &target, &headers, body).await
}

// ---------------------------------------------------------------------------
// Forwarding
// ---------------------------------------------------------------------------

async fn forward(
    client: &BackendClient,
    method: Method,
    target: &str,
    headers: &HeaderMap,
    body: Body,
) -> Response {
    let bytes = match axum::body::to_bytes(body, MAX_PROXY_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(backend = client.name(), path = %target, error = %e, "Proxy body rejected");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({ "error": "Request body too large" })),
            )
                .into_response();
        }
    };

    tracing::debug!(backend = client.name(), %method, path = %target, "Proxying request");
    match client
        .forward(method, target, forwarded_headers(headers), bytes.into())
        .await
    {
        Ok(response) => relay_response(response),
        Err(e) => {
            tracing::warn!(backend = client.name(), path = %target, error = %e, "Proxy request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// Backend path and query for a proxied request URI.
///
/// The raw (still percent-encoded) path is used so encoded slashes survive.
pub fn backend_target(path: &str, query: Option<&str>, prefix: &str) -> String {
    let rest = path.strip_prefix(prefix).unwrap_or(path);
    let rest = if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    };
    match query {
        Some(q) if !q.is_empty() => format!("{rest}?{q}"),
        _ => rest,
    }
}

/// The subset of request headers passed on to a backend.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [AUTHORIZATION, CONTENT_TYPE, ACCEPT, RANGE, IF_RANGE] {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// Turn a backend response into an Axum response, streaming the body.
pub fn relay_response(response: reqwest::Response) -> Response {
    let status = response.status();
    let mut headers = response.headers().clone();
    strip_hop_by_hop(&mut headers);

    let mut relayed = Response::new(Body::from_stream(response.bytes_stream()));
    *relayed.status_mut() = status;
    *relayed.headers_mut() = headers;
    relayed
}

/// Remove hop-by-hop headers, including any named in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    for name in HOP_BY_HOP_HEADERS {
        headers.remove(*name);
    }
    for name in &named {
        headers.remove(name.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn target_keeps_query_and_encoding() {
        assert_eq!(
            backend_target("/proxy/traffic/orders/5/spots", Some("limit=10"), TRAFFIC_PREFIX),
            "/orders/5/spots?limit=10"
        );
        assert_eq!(
            backend_target("/proxy/music/files/a%2Fb.mp3", None, MUSIC_PREFIX),
            "/files/a%2Fb.mp3"
        );
        assert_eq!(backend_target("/proxy/music/artists", Some(""), MUSIC_PREFIX), "/artists");
    }

    #[test]
    fn only_known_request_headers_are_forwarded() {
        let mut incoming = HeaderMap::new();
        incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        incoming.insert(RANGE, HeaderValue::from_static("bytes=0-99"));
        incoming.insert("cookie", HeaderValue::from_static("session=1"));
        incoming.insert("host", HeaderValue::from_static("localhost:3000"));

        let out = forwarded_headers(&incoming);
        assert_eq!(out.len(), 2);
        assert_eq!(out[AUTHORIZATION], "Bearer t");
        assert_eq!(out[RANGE], "bytes=0-99");
    }

    #[test]
    fn hop_by_hop_headers_are_stripped() {
        let mut headers = HeaderMap::new();
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive, x-trace"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert("x-trace", HeaderValue::from_static("abc"));
        headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));

        strip_hop_by_hop(&mut headers);

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "audio/mpeg");
    }
}

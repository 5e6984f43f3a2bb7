//! HTTP client for one external REST backend.
//!
//! Every call forwards the caller's bearer token. Reads can go through the
//! [`QueryCache`]; successful writes evict cached reads of the same
//! resource. Error bodies are normalised with
//! [`airdesk_core::error_message::extract_error_message`].

use std::time::Duration;

use airdesk_core::error_message::extract_error_message;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheKey, QueryCache};
use crate::error::BackendError;
use crate::token::BearerToken;

/// Client for a single backend (traffic or music).
#[derive(Debug)]
pub struct BackendClient {
    name: &'static str,
    base_url: String,
    http: reqwest::Client,
    timeout: Duration,
    cache: QueryCache,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// * `timeout` - total budget for a JSON call, and the connect and
    ///   per-read budget for streamed responses.
    /// * `cache_ttl` - lifetime of cached reads; zero disables caching.
    pub fn new(
        name: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
        cache_ttl: Duration,
    ) -> Result<Self, BackendError> {
        // Total deadlines are set per request; streamed bodies only get per-read budgets.
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            name,
            base_url,
            http,
            timeout,
            cache: QueryCache::new(cache_ttl),
        })
    }

    /// Short backend name used in logs (`"traffic"`, `"music"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The read cache shared by all repositories of this backend.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // ---- reads ----

    /// `GET path?query` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let request = self.request(Method::GET, token, path).query(query);
        let value = self.execute(request, path).await?;
        decode(value)
    }

    /// Like [`get_json`](Self::get_json), answering from the cache while the
    /// entry is fresh.
    pub async fn get_json_cached<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let key = CacheKey::new(token, path, query);
        if let Some(value) = self.cache.get(&key) {
            tracing::trace!(backend = self.name, path, "Cache hit");
            return decode(value);
        }

        let generation = self.cache.generation(path);
        let request = self.request(Method::GET, token, path).query(query);
        let value = self.execute(request, path).await?;
        if !self.cache.insert_if_current(key, value.clone(), generation) {
            tracing::debug!(backend = self.name, path, "Write landed during read, not caching");
        }
        decode(value)
    }

    /// `GET` with its own time budget, overriding the client default.
    pub async fn get_json_with_timeout<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, BackendError> {
        let request = self
            .request(Method::GET, token, path)
            .query(query)
            .timeout(timeout);
        let value = self.execute(request, path).await?;
        decode(value)
    }

    // ---- writes ----

    /// `POST` a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(
        &self,
        token: &BearerToken,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, token, path, body).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    pub async fn put_json<B, T>(
        &self,
        token: &BearerToken,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, token, path, body).await
    }

    /// `POST` without a body, decoding whatever JSON comes back.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
    ) -> Result<T, BackendError> {
        let request = self.request(Method::POST, token, path);
        let value = self.execute(request, path).await?;
        self.cache.invalidate_resource(path);
        decode(value)
    }

    /// `DELETE path`. The response body, if any, is discarded.
    pub async fn delete(&self, token: &BearerToken, path: &str) -> Result<(), BackendError> {
        let request = self.request(Method::DELETE, token, path);
        self.execute(request, path).await?;
        self.cache.invalidate_resource(path);
        Ok(())
    }

    /// `POST` a multipart form (file uploads).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, BackendError> {
        let request = self.request(Method::POST, token, path).multipart(form);
        let value = self.execute(request, path).await?;
        self.cache.invalidate_resource(path);
        decode(value)
    }

    // ---- raw passthrough ----

    /// Send a request verbatim and hand back the raw response.
    ///
    /// `path_and_query` is appended to the base URL as-is. The response is
    /// returned regardless of status so the caller can relay it. A
    /// successful non-`GET` still evicts cached reads of the resource.
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        headers: HeaderMap,
        body: reqwest::Body,
    ) -> Result<Response, BackendError> {
        let is_read = method == Method::GET || method == Method::HEAD;
        let response = self
            .http
            .request(method, self.url(path_and_query))
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::from_send(e, path_and_query))?;

        if !is_read && response.status().is_success() {
            self.cache.invalidate_resource(path_and_query);
        }
        Ok(response)
    }

    /// `GET path` with the caller's headers, returning the raw response for
    /// streaming. Non-2xx answers become [`BackendError::Api`].
    ///
    /// Only connect and per-read budgets apply, so a slow but steady body
    /// is relayed to the end.
    pub async fn stream(
        &self,
        token: &BearerToken,
        path: &str,
        headers: HeaderMap,
    ) -> Result<Response, BackendError> {
        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, token.header_value())
            .headers(headers)
            .send()
            .await
            .map_err(|e| BackendError::from_send(e, path))?;
        ensure_success(response).await
    }

    /// Whether the backend answers HTTP at all. Any status counts.
    pub async fn ping(&self) -> bool {
        let request = self.http.get(&self.base_url).timeout(self.timeout);
        match request.send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(backend = self.name, error = %e, "Backend unreachable");
                false
            }
        }
    }

    // ---- private helpers ----

    /// Builder for a buffered JSON call, carrying the default total budget.
    fn request(&self, method: Method, token: &BearerToken, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(AUTHORIZATION, token.header_value())
            .timeout(self.timeout)
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        token: &BearerToken,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, token, path).json(body);
        let value = self.execute(request, path).await?;
        self.cache.invalidate_resource(path);
        decode(value)
    }

    /// Send, check status, and parse the body as JSON (`null` when empty).
    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Value, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::from_send(e, path))?;

        let response = ensure_success(response).await.inspect_err(|e| {
            tracing::warn!(backend = self.name, path, error = %e, "Backend call failed");
        })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::from_send(e, path))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Return the response unchanged on 2xx, or a [`BackendError::Api`]
/// carrying the extracted message.
pub async fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    let body = response.bytes().await.unwrap_or_default();

    Err(BackendError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body, &fallback),
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
}

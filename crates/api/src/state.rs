use std::sync::Arc;

use airdesk_backend::BackendClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the traffic backend (orders, spots, stations, ...).
    pub traffic: Arc<BackendClient>,
    /// Client for the music backend (artists, submissions, ...).
    pub music: Arc<BackendClient>,
}

impl AppState {
    /// Build both backend clients from configuration.
    pub fn from_config(config: ServerConfig) -> Result<Self, airdesk_backend::BackendError> {
        let timeout = std::time::Duration::from_secs(config.backend_timeout_secs);
        let ttl = std::time::Duration::from_secs(config.cache_ttl_secs);

        let traffic = BackendClient::new("traffic", &config.traffic_backend_url, timeout, ttl)?;
        let music = BackendClient::new("music", &config.music_backend_url, timeout, ttl)?;

        Ok(Self {
            config: Arc::new(config),
            traffic: Arc::new(traffic),
            music: Arc::new(music),
        })
    }
}

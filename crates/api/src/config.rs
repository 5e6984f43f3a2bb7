/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds (default: `60`). Large uploads need
    /// more than the backend call budget.
    pub request_timeout_secs: u64,
    /// Base URL of the traffic backend.
    pub traffic_backend_url: String,
    /// Base URL of the music backend.
    pub music_backend_url: String,
    /// Default budget for a single backend call in seconds (default: `30`).
    pub backend_timeout_secs: u64,
    /// Lifetime of cached backend reads in seconds; `0` disables the cache.
    pub cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `TRAFFIC_BACKEND_URL`  | `http://localhost:8000`    |
    /// | `MUSIC_BACKEND_URL`    | `http://localhost:8001`    |
    /// | `BACKEND_TIMEOUT_SECS` | `30`                       |
    /// | `QUERY_CACHE_TTL_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 60);

        let traffic_backend_url = std::env::var("TRAFFIC_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());

        let music_backend_url = std::env::var("MUSIC_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8001".into());

        let backend_timeout_secs = env_u64("BACKEND_TIMEOUT_SECS", 30);
        let cache_ttl_secs = env_u64("QUERY_CACHE_TTL_SECS", 30);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            traffic_backend_url,
            music_backend_url,
            backend_timeout_secs,
            cache_ttl_secs,
        }
    }
}

/// Read a `u64` env var, panicking on a malformed value so misconfiguration
/// fails at startup.
fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u64")),
        Err(_) => default,
    }
}

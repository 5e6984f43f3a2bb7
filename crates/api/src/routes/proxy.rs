//! Raw proxy routes, mounted at the root next to `/health`.

use axum::routing::any;
use axum::Router;

use crate::handlers::proxy;
use crate::state::AppState;

/// ```text
/// ANY    /proxy/traffic/{*path}     -> proxy_traffic
/// ANY    /proxy/music/{*path}       -> proxy_music
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/{{*path}}", proxy::TRAFFIC_PREFIX),
            any(proxy::proxy_traffic),
        )
        .route(
            &format!("{}/{{*path}}", proxy::MUSIC_PREFIX),
            any(proxy::proxy_music),
        )
}

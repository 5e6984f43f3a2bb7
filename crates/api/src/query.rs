//! Shared query parameter types and helpers for API handlers.

use airdesk_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive` flag.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// Clamp caller-supplied paging values in place. Absent values stay absent
/// so the backend applies its own defaults.
pub fn clamp_page(limit: &mut Option<i64>, offset: &mut Option<i64>) {
    if limit.is_some() {
        *limit = Some(clamp_limit(*limit, DEFAULT_LIMIT, MAX_LIMIT));
    }
    if offset.is_some() {
        *offset = Some(clamp_offset(*offset));
    }
}

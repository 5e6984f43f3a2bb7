//! Shared response envelope types for API handlers.
//!
//! All typed API responses use a `{ "data": ... }` envelope. Raw proxy
//! routes relay the backend body unchanged instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: orders }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

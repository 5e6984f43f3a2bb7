//! Bearer-token extractor for Axum handlers.
//!
//! Tokens are issued and verified by the backends. This extractor only
//! checks that one is present and well formed so that an unauthenticated
//! request never reaches a backend.

use airdesk_backend::BearerToken;
use airdesk_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;

/// The caller's bearer token taken from the `Authorization` header.
///
/// Use this as an extractor parameter in any typed handler:
///
/// ```ignore
/// async fn my_handler(auth: BearerAuth, State(state): State<AppState>) -> AppResult<...> {
///     OrderRepo::list(&state.traffic, &auth.token, &query).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuth {
    pub token: BearerToken,
}

impl<S: Send + Sync> FromRequestParts<S> for BearerAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = BearerToken::from_header_value(header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        Ok(BearerAuth { token })
    }
}

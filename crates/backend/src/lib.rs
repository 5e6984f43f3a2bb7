//! Typed client for the external Airdesk REST backends.
//!
//! - [`BackendClient`] -- one per backend (traffic, music); wraps a pooled
//!   `reqwest::Client`, the base URL, and a [`QueryCache`].
//! - [`BearerToken`] -- the caller's token, forwarded on every request.
//! - [`models`] -- entity records and draft DTOs.
//! - [`repositories`] -- one zero-sized struct per resource.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod repositories;
pub mod token;

pub use cache::QueryCache;
pub use client::BackendClient;
pub use error::BackendError;
pub use token::BearerToken;

//! Airdesk domain logic.
//!
//! Everything in this crate is free of IO so it can be shared by the
//! backend client, the API server, and their tests:
//!
//! - [`spots`] -- naive spot generation for an order's flight dates.
//! - [`upload`] -- the MP3 upload gate.
//! - [`error_message`] -- message extraction from backend error bodies.
//! - [`review`], [`rights`], [`conflicts`] -- workflow vocabularies.
//! - [`pagination`] -- limit/offset clamping.

pub mod conflicts;
pub mod error;
pub mod error_message;
pub mod pagination;
pub mod review;
pub mod rights;
pub mod spots;
pub mod types;
pub mod upload;

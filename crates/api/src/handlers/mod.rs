//! Request handlers.
//!
//! Typed handlers take a [`BearerAuth`](crate::middleware::auth::BearerAuth),
//! validate their input locally, and delegate to the matching repository in
//! `airdesk_backend`. Errors map to HTTP via [`AppError`](crate::error::AppError).

pub mod agency;
pub mod artist;
pub mod audit;
pub mod conflict;
pub mod libretime;
pub mod notification;
pub mod order;
pub mod proxy;
pub mod rights;
pub mod sales_team;
pub mod spot;
pub mod station;
pub mod statistics;
pub mod submission;

//! Repository for traffic `/orders`.

use airdesk_core::types::EntityId;

use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::order::{NewOrder, Order, OrderQuery, OrderUpdate};
use crate::models::spot::Spot;
use crate::token::BearerToken;

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// List orders matching the filters.
    pub async fn list(
        client: &BackendClient,
        token: &BearerToken,
        query: &OrderQuery,
    ) -> Result<Vec<Order>, BackendError> {
        client
            .get_json_cached(token, "/orders", &query.to_pairs())
            .await
    }

    /// Fetch one order.
    pub async fn get(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Order, BackendError> {
        client
            .get_json_cached(token, &format!("/orders/{id}"), &[])
            .await
    }

    /// Create an order, returning the stored record.
    pub async fn create(
        client: &BackendClient,
        token: &BearerToken,
        input: &NewOrder,
    ) -> Result<Order, BackendError> {
        client.post_json(token, "/orders", input).await
    }

    /// Apply a partial update, returning the stored record.
    pub async fn update(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
        input: &OrderUpdate,
    ) -> Result<Order, BackendError> {
        client
            .put_json(token, &format!("/orders/{id}"), input)
            .await
    }

    /// Delete an order (and, backend-side, its spots).
    pub async fn delete(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<(), BackendError> {
        client.delete(token, &format!("/orders/{id}")).await?;
        client.cache().invalidate_resource("/spots");
        Ok(())
    }

    /// List the spots scheduled for an order.
    pub async fn list_spots(
        client: &BackendClient,
        token: &BearerToken,
        id: EntityId,
    ) -> Result<Vec<Spot>, BackendError> {
        client
            .get_json_cached(token, &format!("/orders/{id}/spots"), &[])
            .await
    }
}

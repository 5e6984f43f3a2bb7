//! Handlers for the traffic `/orders` resource, including spot generation.

use airdesk_backend::models::order::{NewOrder, Order, OrderQuery, OrderUpdate};
use airdesk_backend::models::spot::{Spot, SpotBatch};
use airdesk_backend::repositories::{OrderRepo, SpotRepo};
use airdesk_core::error::CoreError;
use airdesk_core::spots::{generate_naive_spots, validate_request, SpotRequest};
use airdesk_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BearerAuth;
use crate::query::clamp_page;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Order CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/traffic/orders
pub async fn list_orders(
    auth: BearerAuth,
    State(state): State<AppState>,
    Query(mut params): Query<OrderQuery>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    clamp_page(&mut params.limit, &mut params.offset);
    let orders = OrderRepo::list(&state.traffic, &auth.token, &params).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/traffic/orders/{id}
pub async fn get_order(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = OrderRepo::get(&state.traffic, &auth.token, id).await?;
    Ok(Json(DataResponse { data: order }))
}

/// POST /api/v1/traffic/orders
///
/// Validates field lengths and the flight dates before the backend sees
/// the order.
pub async fn create_order(
    auth: BearerAuth,
    State(state): State<AppState>,
    Json(input): Json<NewOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<Order>>)> {
    input.validate()?;
    input.check_flight_dates()?;

    let order = OrderRepo::create(&state.traffic, &auth.token, &input).await?;
    tracing::info!(order_id = order.id, advertiser = %order.advertiser, "Order created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// PUT /api/v1/traffic/orders/{id}
pub async fn update_order(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<OrderUpdate>,
) -> AppResult<Json<DataResponse<Order>>> {
    input.validate()?;
    input.check_flight_dates()?;

    let order = OrderRepo::update(&state.traffic, &auth.token, id, &input).await?;
    Ok(Json(DataResponse { data: order }))
}

/// DELETE /api/v1/traffic/orders/{id}
pub async fn delete_order(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    OrderRepo::delete(&state.traffic, &auth.token, id).await?;
    tracing::info!(order_id = id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Spots of an order
// ---------------------------------------------------------------------------

/// GET /api/v1/traffic/orders/{id}/spots
pub async fn list_order_spots(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Spot>>>> {
    let spots = OrderRepo::list_spots(&state.traffic, &auth.token, id).await?;
    Ok(Json(DataResponse { data: spots }))
}

/// POST /api/v1/traffic/orders/{id}/spots/generate
///
/// Generates one spot per cadence step of every broadcast day in the
/// requested range and submits them as a single batch. The range must lie
/// inside the order's flight dates.
pub async fn generate_spots(
    auth: BearerAuth,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<SpotRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Spot>>>)> {
    validate_request(&request)?;

    let order = OrderRepo::get(&state.traffic, &auth.token, id).await?;
    if request.start_date < order.start_date || request.end_date > order.end_date {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Requested range {}..{} is outside the order's flight {}..{}",
            request.start_date, request.end_date, order.start_date, order.end_date
        ))));
    }

    let drafts = generate_naive_spots(order.id, order.station_id, &request)?;
    if drafts.is_empty() {
        return Err(AppError::BadRequest("No spots fit the requested range".into()));
    }

    let count = drafts.len();
    let batch = SpotBatch {
        order_id: order.id,
        spots: drafts,
    };
    let created = SpotRepo::create_batch(&state.traffic, &auth.token, &batch).await?;

    tracing::info!(
        order_id = order.id,
        requested = count,
        created = created.len(),
        "Spots generated"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

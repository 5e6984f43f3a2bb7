//! Route definitions for the traffic backend.
//!
//! All endpoints require a bearer token.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    agency, audit, conflict, notification, order, sales_team, spot, station,
};
use crate::state::AppState;

/// Routes mounted at `/traffic`.
///
/// ```text
/// GET    /orders                          -> list_orders
/// POST   /orders                          -> create_order
/// GET    /orders/{id}                     -> get_order
/// PUT    /orders/{id}                     -> update_order
/// DELETE /orders/{id}                     -> delete_order
/// GET    /orders/{id}/spots               -> list_order_spots
/// POST   /orders/{id}/spots/generate      -> generate_spots
///
/// PUT    /spots/{id}                      -> update_spot
/// DELETE /spots/{id}                      -> delete_spot
///
/// GET    /conflicts                       -> list_conflicts
/// POST   /conflicts/{id}/resolve          -> resolve_conflict
///
/// GET    /stations                        -> list_stations
/// POST   /stations                        -> create_station
/// GET    /stations/{id}                   -> get_station
/// PUT    /stations/{id}                   -> update_station
/// DELETE /stations/{id}                   -> delete_station
///
/// GET    /agencies                        -> list_agencies
/// POST   /agencies                        -> create_agency
/// GET    /agencies/{id}                   -> get_agency
/// PUT    /agencies/{id}                   -> update_agency
/// DELETE /agencies/{id}                   -> delete_agency
///
/// GET    /sales-teams                     -> list_teams
/// POST   /sales-teams                     -> create_team
/// GET    /sales-teams/{id}                -> get_team
/// PUT    /sales-teams/{id}                -> update_team
/// DELETE /sales-teams/{id}                -> delete_team
/// POST   /sales-teams/{id}/reps           -> add_rep
/// DELETE /sales-teams/{id}/reps/{rep_id}  -> remove_rep
///
/// GET    /notifications                   -> list_notifications
/// GET    /notifications/unread-count      -> unread_count
/// POST   /notifications/read-all          -> mark_all_read
/// POST   /notifications/{id}/read         -> mark_read
///
/// GET    /audit-logs                      -> query_audit_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Orders and their spots
        .route("/orders", get(order::list_orders).post(order::create_order))
        .route(
            "/orders/{id}",
            get(order::get_order)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route("/orders/{id}/spots", get(order::list_order_spots))
        .route("/orders/{id}/spots/generate", post(order::generate_spots))
        .route(
            "/spots/{id}",
            put(spot::update_spot).delete(spot::delete_spot),
        )
        // Conflicts
        .route("/conflicts", get(conflict::list_conflicts))
        .route("/conflicts/{id}/resolve", post(conflict::resolve_conflict))
        // Reference data
        .route(
            "/stations",
            get(station::list_stations).post(station::create_station),
        )
        .route(
            "/stations/{id}",
            get(station::get_station)
                .put(station::update_station)
                .delete(station::delete_station),
        )
        .route(
            "/agencies",
            get(agency::list_agencies).post(agency::create_agency),
        )
        .route(
            "/agencies/{id}",
            get(agency::get_agency)
                .put(agency::update_agency)
                .delete(agency::delete_agency),
        )
        .route(
            "/sales-teams",
            get(sales_team::list_teams).post(sales_team::create_team),
        )
        .route(
            "/sales-teams/{id}",
            get(sales_team::get_team)
                .put(sales_team::update_team)
                .delete(sales_team::delete_team),
        )
        .route("/sales-teams/{id}/reps", post(sales_team::add_rep))
        .route(
            "/sales-teams/{id}/reps/{rep_id}",
            axum::routing::delete(sales_team::remove_rep),
        )
        // Notifications
        .route("/notifications", get(notification::list_notifications))
        .route("/notifications/unread-count", get(notification::unread_count))
        .route("/notifications/read-all", post(notification::mark_all_read))
        .route("/notifications/{id}/read", post(notification::mark_read))
        // Audit
        .route("/audit-logs", get(audit::query_audit_logs))
}

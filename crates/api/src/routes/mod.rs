pub mod health;
pub mod music;
pub mod proxy;
pub mod traffic;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /traffic/orders                                  list, create
/// /traffic/orders/{id}                             get, update, delete
/// /traffic/orders/{id}/spots                       list spots of an order
/// /traffic/orders/{id}/spots/generate              naive spot generation (POST)
/// /traffic/spots/{id}                              update, delete
/// /traffic/conflicts                               list (?status, station_id)
/// /traffic/conflicts/{id}/resolve                  resolve (POST)
/// /traffic/stations                                list (?include_inactive), create
/// /traffic/stations/{id}                           get, update, delete
/// /traffic/agencies                                list, create
/// /traffic/agencies/{id}                           get, update, delete
/// /traffic/sales-teams                             list, create
/// /traffic/sales-teams/{id}                        get, update, delete
/// /traffic/sales-teams/{id}/reps                   add rep (POST)
/// /traffic/sales-teams/{id}/reps/{rep_id}          remove rep (DELETE)
/// /traffic/notifications                           list (?unread_only, limit, offset)
/// /traffic/notifications/unread-count              unread count (GET)
/// /traffic/notifications/read-all                  mark all read (POST)
/// /traffic/notifications/{id}/read                 mark read (POST)
/// /traffic/audit-logs                              query (GET)
///
/// /music/artists                                   list
/// /music/artists/me                                get, update own profile
/// /music/artists/{id}                              get, update (admin)
/// /music/artists/{id}/statistics                   airplay statistics
/// /music/submissions                               admin list, upload (multipart)
/// /music/submissions/mine                          own submissions
/// /music/submissions/{id}                          get, delete
/// /music/submissions/{id}/review                   review (POST)
/// /music/submissions/{id}/isrc                     assign ISRC (PUT)
/// /music/submissions/{id}/rights                   list permissions
/// /music/submissions/{id}/rights/{permission}      toggle permission (PUT)
/// /music/submissions/{id}/statistics               airplay statistics
/// /music/submissions/{id}/libretime                push (POST), status (GET)
/// /music/submissions/{id}/audio                    audio stream (Range aware)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/traffic", traffic::router())
        .nest("/music", music::router())
}

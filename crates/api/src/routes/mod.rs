pub mod conversion;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /conversion/new                                  create rule (POST)
/// /conversion/show                                 get rule by unit pair
/// /conversion/show/all                             list rules
/// /conversion/update                               replace factor/addend (PUT)
/// /conversion/remove                               delete rule (DELETE)
/// /conversion/convert                              convert a value
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/conversion", conversion::router())
}

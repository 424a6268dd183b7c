//! Route definitions for the `/conversion` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::conversion;
use crate::state::AppState;

/// Routes mounted at `/conversion`.
///
/// ```text
/// POST   /new        -> create
/// GET    /show       -> show
/// GET    /show/all   -> list
/// PUT    /update     -> update
/// DELETE /remove     -> remove
/// GET    /convert    -> convert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(conversion::create))
        .route("/show", get(conversion::show))
        .route("/show/all", get(conversion::list))
        .route("/update", put(conversion::update))
        .route("/remove", delete(conversion::remove))
        .route("/convert", get(conversion::convert))
}

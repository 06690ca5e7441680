//! Route definitions for `/marks`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::mark;
use crate::state::AppState;

/// Mark routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /marks/             -> list
/// GET    /marks              -> list
/// POST   /marks/new          -> create
/// GET    /marks/{id}         -> get_by_id
/// PATCH  /marks/{id}/edit    -> update
/// DELETE /marks/{id}/delete  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/marks/", get(mark::list))
        .route("/marks", get(mark::list))
        .route("/marks/new", post(mark::create))
        .route("/marks/{id}", get(mark::get_by_id))
        .route("/marks/{id}/edit", patch(mark::update))
        .route("/marks/{id}/delete", delete(mark::delete))
}

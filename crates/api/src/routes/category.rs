//! Route definitions for `/categories`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /categories/             -> list
/// GET    /categories              -> list
/// POST   /categories/new          -> create
/// GET    /categories/{id}         -> get_by_id
/// PATCH  /categories/{id}/edit    -> update
/// DELETE /categories/{id}/delete  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories/", get(category::list))
        .route("/categories", get(category::list))
        .route("/categories/new", post(category::create))
        .route("/categories/{id}", get(category::get_by_id))
        .route("/categories/{id}/edit", patch(category::update))
        .route("/categories/{id}/delete", delete(category::delete))
}

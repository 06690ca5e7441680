//! Route definitions for `/animals`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::animal;
use crate::state::AppState;

/// Animal routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /animals/             -> list
/// GET    /animals              -> list
/// POST   /animals/new          -> create
/// GET    /animals/{id}         -> get_by_id
/// PATCH  /animals/{id}/edit    -> update
/// DELETE /animals/{id}/delete  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/animals/", get(animal::list))
        .route("/animals", get(animal::list))
        .route("/animals/new", post(animal::create))
        .route("/animals/{id}", get(animal::get_by_id))
        .route("/animals/{id}/edit", patch(animal::update))
        .route("/animals/{id}/delete", delete(animal::delete))
}

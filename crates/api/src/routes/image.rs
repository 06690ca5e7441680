//! Route definitions for `/images`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Image routes, mounted under `/api/v1`.
///
/// ```text
/// POST   /images/new          -> upload (multipart: image, id)
/// DELETE /images/{id}/delete  -> delete
/// ```
///
/// `upload_limit` replaces axum's default body limit on the upload route.
pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/images/new",
            post(image::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/images/{id}/delete", delete(image::delete))
}

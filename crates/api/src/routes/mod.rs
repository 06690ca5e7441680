pub mod animal;
pub mod category;
pub mod health;
pub mod image;
pub mod mark;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories/ | /categories                 list
/// /categories/new                            create
/// /categories/{id}                           get
/// /categories/{id}/edit                      rename (PATCH)
/// /categories/{id}/delete                    delete
///
/// /marks/...                                 same shape as categories
/// /animals/...                               same shape as categories
///
/// /images/new                                upload and attach (multipart)
/// /images/{id}/delete                        delete
/// ```
///
/// Paths are registered in full rather than nested so each collection
/// answers with and without its trailing slash.
pub fn api_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .merge(category::router())
        .merge(mark::router())
        .merge(animal::router())
        .merge(image::router(upload_limit))
}

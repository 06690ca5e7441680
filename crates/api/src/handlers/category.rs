//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_core::uniqueness::is_duplicate;
use petshop_db::models::category::{Category, CreateCategory, UpdateCategory};
use petshop_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::{MessageResponse, CATEGORY_CREATED};
use crate::state::AppState;

/// GET /api/v1/categories/
///
/// An empty table answers 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound {
            entities: "Categories",
        }));
    }
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;
    Ok(Json(category))
}

/// POST /api/v1/categories/new
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    ensure_unique_name(&state, &input.name, None).await?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: CATEGORY_CREATED,
        }),
    ))
}

/// PATCH /api/v1/categories/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> AppResult<StatusCode> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;

    ensure_unique_name(&state, &input.name, Some(id)).await?;

    CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Category", id))?;

    tracing::info!(category_id = id, name = %input.name, "Category updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/categories/{id}/delete
///
/// Animals in this category stay, with their category cleared.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Category", id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_unique_name(state: &AppState, name: &str, editing: Option<DbId>) -> AppResult<()> {
    let holder = CategoryRepo::find_by_name(&state.pool, name)
        .await?
        .map(|c| c.id);
    if is_duplicate(holder, editing) {
        return Err(AppError::wrong_data(format!(
            "Category '{name}' already exists"
        )));
    }
    Ok(())
}

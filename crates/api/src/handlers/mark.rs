//! Handlers for the `/marks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_core::uniqueness::is_duplicate;
use petshop_db::models::mark::{CreateMark, Mark, UpdateMark};
use petshop_db::repositories::MarkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::{MessageResponse, MARK_CREATED};
use crate::state::AppState;

/// GET /api/v1/marks/
///
/// An empty table answers 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mark>>> {
    let marks = MarkRepo::list(&state.pool).await?;
    if marks.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound {
            entities: "Marks",
        }));
    }
    Ok(Json(marks))
}

/// GET /api/v1/marks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Mark>> {
    let mark = MarkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Mark", id))?;
    Ok(Json(mark))
}

/// POST /api/v1/marks/new
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMark>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    ensure_unique_name(&state, &input.name, None).await?;

    let mark = MarkRepo::create(&state.pool, &input).await?;

    tracing::info!(mark_id = mark.id, name = %mark.name, "Mark created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MARK_CREATED,
        }),
    ))
}

/// PATCH /api/v1/marks/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateMark>,
) -> AppResult<StatusCode> {
    MarkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Mark", id))?;

    ensure_unique_name(&state, &input.name, Some(id)).await?;

    MarkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Mark", id))?;

    tracing::info!(mark_id = id, name = %input.name, "Mark updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/marks/{id}/delete
///
/// Animals carrying this mark stay, with their mark cleared.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if !MarkRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Mark", id));
    }

    tracing::info!(mark_id = id, "Mark deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_unique_name(state: &AppState, name: &str, editing: Option<DbId>) -> AppResult<()> {
    let holder = MarkRepo::find_by_name(&state.pool, name)
        .await?
        .map(|c| c.id);
    if is_duplicate(holder, editing) {
        return Err(AppError::wrong_data(format!(
            "Mark '{name}' already exists"
        )));
    }
    Ok(())
}

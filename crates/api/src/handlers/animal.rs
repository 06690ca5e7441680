//! Handlers for the `/animals` resource.
//!
//! Creates and edits validate in a fixed order: body shape (extractor),
//! target existence (edit only), category, mark, status, then `animal_id`
//! uniqueness. Every failure except a missing edit/delete target is wrong
//! data.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use petshop_core::animal::is_valid_status;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_core::uniqueness::is_duplicate;
use petshop_db::models::animal::{AnimalDetail, CreateAnimal, UpdateAnimal};
use petshop_db::repositories::{AnimalRepo, CategoryRepo, MarkRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::{MessageResponse, ANIMAL_CREATED};
use crate::state::AppState;

/// GET /api/v1/animals/
///
/// An empty table answers 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalDetail>>> {
    let animals = AnimalRepo::list_details(&state.pool).await?;
    if animals.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound {
            entities: "Animals",
        }));
    }
    Ok(Json(animals))
}

/// GET /api/v1/animals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<AnimalDetail>> {
    let animal = AnimalRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Animal", id))?;
    Ok(Json(animal))
}

/// POST /api/v1/animals/new
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAnimal>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    check_animal_input(&state, &input, None).await?;

    let animal = AnimalRepo::create(&state.pool, &input).await?;

    tracing::info!(
        id = animal.id,
        animal_id = animal.animal_id,
        status = %animal.status,
        "Animal created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: ANIMAL_CREATED,
        }),
    ))
}

/// PATCH /api/v1/animals/{id}/edit
///
/// Replaces every field; the attached image is untouched.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateAnimal>,
) -> AppResult<StatusCode> {
    AnimalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Animal", id))?;

    check_animal_input(&state, &input, Some(id)).await?;

    AnimalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Animal", id))?;

    tracing::info!(id, animal_id = input.animal_id, status = %input.status, "Animal updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/animals/{id}/delete
///
/// The animal's image record and file are left in place.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if !AnimalRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Animal", id));
    }

    tracing::info!(id, "Animal deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Reference, status, and uniqueness checks shared by create and edit.
///
/// `editing` is the id of the animal being edited, excluded from the
/// duplicate check.
async fn check_animal_input(
    state: &AppState,
    input: &CreateAnimal,
    editing: Option<DbId>,
) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .is_none()
    {
        return Err(AppError::wrong_data(format!(
            "Category {} does not exist",
            input.category_id
        )));
    }

    if MarkRepo::find_by_id(&state.pool, input.mark_id)
        .await?
        .is_none()
    {
        return Err(AppError::wrong_data(format!(
            "Mark {} does not exist",
            input.mark_id
        )));
    }

    // The repository guards this too; checking here keeps the failure ahead
    // of the duplicate lookup.
    if !is_valid_status(&input.status) {
        return Err(AppError::wrong_data(format!(
            "Invalid status: {}",
            input.status
        )));
    }

    let holder = AnimalRepo::find_by_animal_id(&state.pool, input.animal_id)
        .await?
        .map(|a| a.id);
    if is_duplicate(holder, editing) {
        return Err(AppError::wrong_data(format!(
            "Duplicate animal_id: {}",
            input.animal_id
        )));
    }

    Ok(())
}

//! Handlers for the `/images` resource.
//!
//! Uploading attaches a new image to an animal and discards the one it
//! replaces. File and record are written in separate steps with no
//! transaction spanning them.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::image::{decode_image, validate_format};
use petshop_core::media::generate_file_token;
use petshop_core::types::DbId;
use petshop_db::models::image::{CreateImage, Image};
use petshop_db::repositories::{AnimalRepo, ImageRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, MultipartForm};
use crate::response::{MessageResponse, IMAGE_CREATED};
use crate::state::AppState;

/// Multipart field carrying the image bytes.
const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the target animal's record id.
const ANIMAL_FIELD: &str = "id";

/// Parsed upload form.
struct UploadForm {
    image: Bytes,
    animal_id: DbId,
}

/// POST /api/v1/images/new
///
/// Multipart fields: `image` (binary) and `id` (animal record id). A
/// missing animal is wrong data here, not 404.
pub async fn upload(
    State(state): State<AppState>,
    MultipartForm(multipart): MultipartForm,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let form = read_upload_form(multipart).await?;

    let animal = AnimalRepo::find_by_id(&state.pool, form.animal_id)
        .await?
        .ok_or_else(|| {
            AppError::wrong_data(format!("Animal {} does not exist", form.animal_id))
        })?;

    if state.media.exceeds_max_size(form.image.len()) {
        return Err(AppError::wrong_data(format!(
            "Image of {} bytes exceeds the {} MB limit",
            form.image.len(),
            state.media.config().max_image_size_mb
        )));
    }

    let decoded = decode_image(&form.image)?;
    validate_format(&decoded.format)?;

    let name = generate_file_token();
    let format = decoded.format.clone();
    state.media.save(&name, decoded).await?;

    let input = CreateImage {
        path: state.media.servable_path(&name, &format),
        name,
        format,
    };
    let image = match ImageRepo::create(&state.pool, &input).await {
        Ok(image) => image,
        Err(e) => {
            if let Err(remove_err) = state.media.remove(&input.name, &input.format).await {
                tracing::warn!(error = %remove_err, "Orphaned image file left in media root");
            }
            return Err(e.into());
        }
    };

    if let Some(old_image_id) = animal.image_id {
        discard_replaced_image(&state, old_image_id).await?;
    }

    attach_image(&state, animal.id, &image).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: IMAGE_CREATED,
        }),
    ))
}

/// DELETE /api/v1/images/{id}/delete
///
/// The backing file must be removed first; if that fails the record stays
/// and the request is wrong data.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Image", id))?;

    state
        .media
        .remove(&image.name, &image.format)
        .await
        .map_err(|e| {
            AppError::wrong_data(format!(
                "Image file {} cannot be removed: {e}",
                image.file_name()
            ))
        })?;

    ImageRepo::delete(&state.pool, image.id).await?;

    tracing::info!(image_id = id, "Image deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Point the animal at its new image.
///
/// If the animal vanished since it was looked up, the new image has no
/// owner: its file and record are dropped and the upload is wrong data.
async fn attach_image(state: &AppState, animal_id: DbId, image: &Image) -> AppResult<()> {
    if AnimalRepo::set_image(&state.pool, animal_id, image.id).await? {
        tracing::info!(
            animal_id,
            image_id = image.id,
            path = %image.path,
            "Image attached to animal",
        );
        return Ok(());
    }

    tracing::warn!(
        animal_id,
        image_id = image.id,
        "Animal deleted during upload, dropping the new image",
    );
    if let Err(e) = state.media.remove(&image.name, &image.format).await {
        tracing::warn!(error = %e, "Orphaned image file left in media root");
    }
    ImageRepo::delete(&state.pool, image.id).await?;

    Err(AppError::wrong_data(format!(
        "Animal {animal_id} does not exist"
    )))
}

/// Best-effort cleanup of an image being replaced.
///
/// The record is deleted only when its file was removed; otherwise the
/// record is left dangling and the upload proceeds.
async fn discard_replaced_image(state: &AppState, image_id: DbId) -> AppResult<()> {
    let Some(old) = ImageRepo::find_by_id(&state.pool, image_id).await? else {
        return Ok(());
    };

    match state.media.remove(&old.name, &old.format).await {
        Ok(()) => {
            ImageRepo::delete(&state.pool, old.id).await?;
            tracing::info!(image_id = old.id, "Replaced image removed");
        }
        Err(e) => {
            tracing::warn!(
                image_id = old.id,
                error = %e,
                "Replaced image file cannot be removed, keeping its record",
            );
        }
    }

    Ok(())
}

/// Collect the `image` and `id` fields. Unknown fields are ignored.
async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut image: Option<Bytes> = None;
    let mut animal_id: Option<DbId> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::wrong_data(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(IMAGE_FIELD) => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::wrong_data(format!("Unreadable image field: {e}")))?;
                image = Some(bytes);
            }
            Some(ANIMAL_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::wrong_data(format!("Unreadable id field: {e}")))?;
                let id = text.trim().parse::<DbId>().map_err(|_| {
                    AppError::wrong_data(format!("Animal id '{text}' is not an integer"))
                })?;
                animal_id = Some(id);
            }
            _ => {}
        }
    }

    let image = image
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::wrong_data("Missing image field"))?;
    let animal_id = animal_id.ok_or_else(|| AppError::wrong_data("Missing id field"))?;

    Ok(UploadForm { image, animal_id })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;
    use image::{ImageFormat, RgbImage};
    use petshop_core::error::CoreError;
    use petshop_core::image::decode_image;
    use petshop_core::media::MediaConfig;
    use sqlx::SqlitePool;

    use super::*;
    use crate::config::ServerConfig;

    fn test_state(pool: SqlitePool, media_root: &std::path::Path) -> AppState {
        AppState::new(
            pool,
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                database_url: "sqlite::memory:".to_string(),
                cors_origins: Vec::new(),
                request_timeout_secs: 30,
                media: MediaConfig {
                    root: media_root.to_path_buf(),
                    url_prefix: "/media/".to_string(),
                    max_image_size_mb: 1.0,
                },
            },
        )
    }

    #[sqlx::test(migrations = "../db/migrations")]
    async fn attach_to_vanished_animal_drops_new_image(pool: SqlitePool) {
        let media = tempfile::tempdir().unwrap();
        let state = test_state(pool.clone(), media.path());

        let mut jpeg = Cursor::new(Vec::new());
        RgbImage::new(8, 8)
            .write_to(&mut jpeg, ImageFormat::Jpeg)
            .unwrap();
        let decoded = decode_image(&jpeg.into_inner()).unwrap();
        let path = state.media.save("orphan", decoded).await.unwrap();

        let image = ImageRepo::create(
            &pool,
            &CreateImage {
                name: "orphan".into(),
                path: state.media.servable_path("orphan", "jpeg"),
                format: "jpeg".into(),
            },
        )
        .await
        .unwrap();

        let result = attach_image(&state, 999, &image).await;

        assert_matches!(result, Err(AppError::Core(CoreError::WrongData(_))));
        assert!(!path.exists());
        assert!(ImageRepo::find_by_id(&pool, image.id).await.unwrap().is_none());
    }
}

//! Repository for the `images` table.

use chrono::Utc;
use petshop_core::image::validate_format;
use petshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoError;
use crate::models::image::{CreateImage, Image};

/// Column list for `images` queries.
const COLUMNS: &str = "id, created_at, name, path, format";

/// Provides persistence for image records. File bytes are handled by
/// `petshop_core::media::MediaStore`.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image record.
    ///
    /// Refuses formats outside `jpg` / `jpeg` before touching the database.
    pub async fn create(pool: &SqlitePool, input: &CreateImage) -> Result<Image, RepoError> {
        validate_format(&input.format)?;

        let query = format!(
            "INSERT INTO images (created_at, name, path, format) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, Image>(&query)
            .bind(Utc::now())
            .bind(&input.name)
            .bind(&input.path)
            .bind(&input.format)
            .fetch_one(pool)
            .await?;
        Ok(image)
    }

    /// Find an image record by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image record by ID. An animal pointing at it is left with
    /// a null image.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

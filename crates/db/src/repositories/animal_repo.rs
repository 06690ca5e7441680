//! Repository for the `animals` table.
//!
//! Writes run the status save-guard so no caller can persist an animal
//! outside the `set` / `approved` / `delivered` workflow.

use chrono::Utc;
use petshop_core::animal::validate_status;
use petshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoError;
use crate::models::animal::{Animal, AnimalDetail, AnimalDetailRow, CreateAnimal, UpdateAnimal};

/// Column list for `animals` queries.
const COLUMNS: &str = "\
    id, created_at, modified_at, animal_id, name, status, \
    category_id, mark_id, image_id";

/// Select list + joins producing [`AnimalDetailRow`]s.
const DETAIL_SELECT: &str = "\
    SELECT a.id, a.created_at, a.modified_at, a.animal_id, a.name, a.status, \
           c.id AS category_id, c.name AS category_name, \
           m.id AS mark_id, m.name AS mark_name, \
           i.id AS image_id, i.path AS image_path \
    FROM animals a \
    LEFT JOIN categories c ON c.id = a.category_id \
    LEFT JOIN marks m ON m.id = a.mark_id \
    LEFT JOIN images i ON i.id = a.image_id";

/// Provides CRUD operations for animals.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal with no image attached.
    pub async fn create(pool: &SqlitePool, input: &CreateAnimal) -> Result<Animal, RepoError> {
        validate_status(&input.status)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO animals \
                 (created_at, modified_at, animal_id, name, status, category_id, mark_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let animal = sqlx::query_as::<_, Animal>(&query)
            .bind(now)
            .bind(now)
            .bind(input.animal_id)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.category_id)
            .bind(input.mark_id)
            .fetch_one(pool)
            .await?;
        Ok(animal)
    }

    /// Find an animal row by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the animal holding the external `animal_id`, if any.
    pub async fn find_by_animal_id(
        pool: &SqlitePool,
        animal_id: i64,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE animal_id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(animal_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an animal with its category, mark, and image embedded.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<AnimalDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AnimalDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AnimalDetail::from))
    }

    /// List every animal, in storage order, with references embedded.
    pub async fn list_details(pool: &SqlitePool) -> Result<Vec<AnimalDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY a.id");
        let rows = sqlx::query_as::<_, AnimalDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AnimalDetail::from).collect())
    }

    /// Overwrite every editable field and bump `modified_at`. The attached
    /// image is left as is.
    ///
    /// Returns `None` if no animal with the given ID exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAnimal,
    ) -> Result<Option<Animal>, RepoError> {
        validate_status(&input.status)?;

        let query = format!(
            "UPDATE animals SET \
                 animal_id = $2, name = $3, status = $4, \
                 category_id = $5, mark_id = $6, modified_at = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let animal = sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(input.animal_id)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.category_id)
            .bind(input.mark_id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(animal)
    }

    /// Point an animal at a new image record.
    ///
    /// Returns `true` if the animal exists.
    pub async fn set_image(
        pool: &SqlitePool,
        id: DbId,
        image_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE animals SET image_id = $2, modified_at = $3 WHERE id = $1")
                .bind(id)
                .bind(image_id)
                .bind(Utc::now())
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an animal by ID. Its image record and file are kept.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `marks` table.

use chrono::Utc;
use petshop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::mark::{CreateMark, Mark, UpdateMark};

/// Column list for `marks` queries.
const COLUMNS: &str = "id, created_at, modified_at, name";

/// Provides CRUD operations for marks.
pub struct MarkRepo;

impl MarkRepo {
    /// Insert a new mark, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMark) -> Result<Mark, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO marks (created_at, modified_at, name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mark>(&query)
            .bind(now)
            .bind(now)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a mark by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Mark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks WHERE id = $1");
        sqlx::query_as::<_, Mark>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the mark holding `name`, if any.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Mark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks WHERE name = $1");
        sqlx::query_as::<_, Mark>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all marks in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Mark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks ORDER BY id");
        sqlx::query_as::<_, Mark>(&query).fetch_all(pool).await
    }

    /// Rename a mark and bump `modified_at`.
    ///
    /// Returns `None` if no mark with the given ID exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMark,
    ) -> Result<Option<Mark>, sqlx::Error> {
        let query = format!(
            "UPDATE marks SET name = $2, modified_at = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mark>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a mark by ID. Referencing animals keep existing with a
    /// null mark.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

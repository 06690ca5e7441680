//! Animal model, nested read representation, and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::non_blank;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `animals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    /// Externally supplied identifier, unique among animals.
    pub animal_id: i64,
    pub name: String,
    pub status: String,
    pub category_id: Option<DbId>,
    pub mark_id: Option<DbId>,
    pub image_id: Option<DbId>,
}

/// Flat `animals LEFT JOIN categories/marks/images` row, folded into
/// [`AnimalDetail`].
#[derive(Debug, Clone, FromRow)]
pub struct AnimalDetailRow {
    pub id: DbId,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub animal_id: i64,
    pub name: String,
    pub status: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub mark_id: Option<DbId>,
    pub mark_name: Option<String>,
    pub image_id: Option<DbId>,
    pub image_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Read representation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnimalCategory {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnimalMark {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnimalImage {
    pub id: DbId,
    pub path: String,
}

/// An animal with its category, mark, and image embedded.
#[derive(Debug, Clone, Serialize)]
pub struct AnimalDetail {
    pub id: DbId,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub animal_id: i64,
    pub name: String,
    pub status: String,
    pub category: Option<AnimalCategory>,
    pub mark: Option<AnimalMark>,
    pub image: Option<AnimalImage>,
}

impl From<AnimalDetailRow> for AnimalDetail {
    fn from(row: AnimalDetailRow) -> Self {
        let category = row
            .category_id
            .zip(row.category_name)
            .map(|(id, name)| AnimalCategory { id, name });
        let mark = row
            .mark_id
            .zip(row.mark_name)
            .map(|(id, name)| AnimalMark { id, name });
        let image = row
            .image_id
            .zip(row.image_path)
            .map(|(id, path)| AnimalImage { id, path });

        Self {
            id: row.id,
            created_at: row.created_at,
            modified_at: row.modified_at,
            animal_id: row.animal_id,
            name: row.name,
            status: row.status,
            category,
            mark,
            image,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an animal.
///
/// Status membership and the existence of the referenced category and mark
/// are checked by the caller; these rules only cover shape.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnimal {
    #[validate(range(min = 1))]
    pub animal_id: i64,
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    pub status: String,
    #[validate(range(min = 1))]
    pub category_id: DbId,
    #[validate(range(min = 1))]
    pub mark_id: DbId,
}

/// Edits replace every field, so they take the same payload as creation.
pub type UpdateAnimal = CreateAnimal;

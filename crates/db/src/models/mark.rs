//! Mark model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::non_blank;

/// A row from the `marks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mark {
    pub id: DbId,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub name: String,
}

/// DTO for creating a mark.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMark {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
}

/// DTO for renaming a mark. The name is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMark {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
}

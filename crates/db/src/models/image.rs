//! Image record model.
//!
//! Image rows are only ever created by the upload flow, so there is no
//! request DTO: [`CreateImage`] is assembled server-side.

use petshop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub created_at: Timestamp,
    /// Generated file name, without extension.
    pub name: String,
    /// Servable path (media URL prefix + file name + extension).
    pub path: String,
    /// Lowercase file extension, one of `jpg` / `jpeg`.
    pub format: String,
}

impl Image {
    /// File name on disk, relative to the media root.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format)
    }
}

/// Values for a new image record.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub name: String,
    pub path: String,
    pub format: String,
}

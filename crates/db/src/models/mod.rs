//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for creates and edits

use validator::ValidationError;

pub mod animal;
pub mod category;
pub mod image;
pub mod mark;

/// Reject strings that are empty once surrounding whitespace is ignored.
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

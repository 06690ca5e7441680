//! Fixed success message bodies.
//!
//! Mutating endpoints answer with a literal message rather than echoing the
//! stored resource.

use serde::Serialize;

/// `{ "message": "..." }` body returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const CATEGORY_CREATED: &str = "Category successfully created";
pub const MARK_CREATED: &str = "Mark successfully created";
pub const ANIMAL_CREATED: &str = "Animal successfully created";
pub const IMAGE_CREATED: &str = "Image successfully created";

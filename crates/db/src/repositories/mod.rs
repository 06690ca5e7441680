//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod animal_repo;
pub mod category_repo;
pub mod image_repo;
pub mod mark_repo;

pub use animal_repo::AnimalRepo;
pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use mark_repo::MarkRepo;

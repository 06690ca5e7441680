//! Domain rules shared by the persistence and HTTP layers.
//!
//! Nothing in here talks to the database. The media store is the only
//! module that touches the filesystem.

pub mod animal;
pub mod error;
pub mod image;
pub mod media;
pub mod types;
pub mod uniqueness;

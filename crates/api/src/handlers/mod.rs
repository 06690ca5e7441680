pub mod animal;
pub mod category;
pub mod image;
pub mod mark;

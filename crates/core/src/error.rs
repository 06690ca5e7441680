use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A collection endpoint found zero records. Empty results are reported
    /// as absence, never as an empty list.
    #[error("No records found: {entities}")]
    NoneFound { entities: &'static str },

    #[error("Wrong data: {0}")]
    WrongData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

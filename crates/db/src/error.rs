use petshop_core::error::CoreError;

/// Error returned by repository writes that run an entity save-guard.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The record failed its save-guard; nothing was written.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

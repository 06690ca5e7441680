use std::sync::Arc;

use petshop_core::media::MediaStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: petshop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image file storage, built from `config.media`.
    pub media: Arc<MediaStore>,
}

impl AppState {
    pub fn new(pool: petshop_db::DbPool, config: ServerConfig) -> Self {
        let media = Arc::new(MediaStore::new(config.media.clone()));
        Self {
            pool,
            config: Arc::new(config),
            media,
        }
    }
}

//! File-backed storage for uploaded animal images.
//!
//! Image bytes live on the local filesystem under [`MediaConfig::root`];
//! the database only records the generated file name, the servable path,
//! and the format. The two are not synchronised: a crash between a file
//! operation and the matching database write can orphan either side.

use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::CoreError;
use crate::image::DecodedImage;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of a generated upload file name (without extension).
pub const FILE_TOKEN_LENGTH: usize = 64;

/// Alphabet for generated file names. Omits `0 O 1 l I`.
const FILE_TOKEN_ALPHABET: &[u8] =
    b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Extra bytes allowed on top of the image maximum for multipart framing
/// and slightly oversized files.
const UPLOAD_BODY_HEADROOM: usize = 2 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where uploads are written and how they are addressed publicly.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory image files are written to.
    pub root: PathBuf,
    /// Prefix prepended to a file name to form its servable path
    /// (e.g. `/media/`).
    pub url_prefix: String,
    /// Largest accepted upload, in megabytes.
    pub max_image_size_mb: f64,
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Generate a random file name of [`FILE_TOKEN_LENGTH`] characters.
pub fn generate_file_token() -> String {
    let mut rng = rand::rng();
    (0..FILE_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..FILE_TOKEN_ALPHABET.len());
            char::from(FILE_TOKEN_ALPHABET[idx])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Reads and writes image files according to a [`MediaConfig`].
#[derive(Debug, Clone)]
pub struct MediaStore {
    config: MediaConfig,
}

impl MediaStore {
    pub fn new(config: MediaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Create the media root if it does not exist yet.
    pub async fn ensure_root(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.config.root).await
    }

    /// Request body limit for the upload route. Leaves headroom over the
    /// image maximum so oversized payloads still reach the size check.
    pub fn upload_body_limit(&self) -> usize {
        let image_max = (self.config.max_image_size_mb * BYTES_PER_MB) as usize;
        image_max.saturating_add(UPLOAD_BODY_HEADROOM)
    }

    /// Whether a payload of `len` bytes is over the configured maximum.
    pub fn exceeds_max_size(&self, len: usize) -> bool {
        len as f64 / BYTES_PER_MB > self.config.max_image_size_mb
    }

    /// On-disk location of the file for an image record.
    pub fn file_path(&self, name: &str, format: &str) -> PathBuf {
        self.config.root.join(format!("{name}.{format}"))
    }

    /// Public path stored on the image record.
    pub fn servable_path(&self, name: &str, format: &str) -> String {
        format!("{}{name}.{format}", self.config.url_prefix)
    }

    /// Re-encode `decoded` into `<root>/<name>.<format>`.
    ///
    /// Encoding runs on the blocking pool. Any failure is wrong data, the
    /// caller must not create a record for it.
    pub async fn save(&self, name: &str, decoded: DecodedImage) -> Result<PathBuf, CoreError> {
        let path = self.file_path(name, &decoded.format);
        let target = path.clone();

        tokio::task::spawn_blocking(move || {
            decoded.image.save_with_format(&target, decoded.container)
        })
        .await
        .map_err(|e| CoreError::Internal(format!("Image encoding task failed: {e}")))?
        .map_err(|e| {
            CoreError::WrongData(format!("Image cannot be saved to {}: {e}", path.display()))
        })?;

        Ok(path)
    }

    /// Remove the file backing an image record.
    ///
    /// A missing file is an error: callers decide whether that blocks the
    /// record deletion.
    pub async fn remove(&self, name: &str, format: &str) -> io::Result<()> {
        let path = self.file_path(name, format);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Image file cannot be removed");
                Err(e)
            }
        }
    }
}

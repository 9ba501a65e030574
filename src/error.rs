/// Error types shared across the gallery
///
/// Storage and configuration errors bubble up to the caller.
/// Thumbnail errors are caught by the cache and only logged.

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The frame extractor exited with a failure status
    #[error("frame extraction failed for {path} ({status}): {stderr}")]
    Extraction {
        path: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The frame extractor succeeded but produced no image bytes
    #[error("frame extraction produced no data for {path}")]
    EmptyFrame { path: String },

    #[error("page {page} is out of range (0..{page_count})")]
    PageOutOfRange { page: usize, page_count: usize },
}

pub type Result<T> = std::result::Result<T, GalleryError>;

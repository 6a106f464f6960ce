//! Error types for markup loading
//!
//! Tree building, search and rendering never fail. Only loading
//! configuration or trees from JSON can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkupError>;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

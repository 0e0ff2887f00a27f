//! Error types for specgrep.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Unknown named style: {0}")]
    UnknownStyle(String),

    #[error("Sheet already exists: {0}")]
    DuplicateSheet(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("No description declared for field '{field}' in category {category}")]
    MissingDescription { category: String, field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Values file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Top-level document in {path} must be a mapping, found {found}")]
    NotAMapping { path: String, found: &'static str },

    #[error("Unsupported mapping key in {path}: {key} (keys must be scalars)")]
    InvalidKey { path: String, key: String },

    #[error("Unsupported number in {path}: {value} (JSON has no NaN or infinity)")]
    NonFiniteNumber { path: String, value: String },

    #[error("Cannot build a schema document: root value is {found}, expected a mapping")]
    InvalidRoot { found: &'static str },

    #[error("Archive error: {message}")]
    Archive { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

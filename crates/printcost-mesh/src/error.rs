//! Error types for mesh loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid STL content: {0}")]
    InvalidContent(String),

    #[error("truncated STL: expected {expected} triangles, got {got}")]
    Truncated { expected: usize, got: usize },
}

impl MeshError {
    pub(crate) fn invalid_content(msg: impl Into<String>) -> Self {
        MeshError::InvalidContent(msg.into())
    }
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;

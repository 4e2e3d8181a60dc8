//! Error types for printcost

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Material preset error: {0}")]
    PresetLoader(String),

    #[error("Mesh error: {0}")]
    Mesh(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid model file: {0}")]
    InvalidModelFile(String),

    #[error("Quote failed: {0}")]
    QuoteFailed(String),

    #[error("CSV export error: {0}")]
    Export(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Model file scanning and validation

use printcost_types::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported model extensions
const MODEL_EXTENSIONS: &[&str] = &["stl"];

/// Check if a path is a supported model file
pub fn is_supported_model(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MODEL_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate a model file exists and has a supported extension
pub fn validate_model(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidModelFile(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_supported_model(path) {
        return Err(Error::InvalidModelFile(format!(
            "Unsupported model format: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Scan a directory for model files
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(Error::InvalidModelFile(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut models = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_supported_model(path) {
            models.push(path.to_path_buf());
        }
    }

    // Sort by filename for consistent ordering
    models.sort_by(|a, b| {
        a.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .cmp(b.file_name().and_then(|n| n.to_str()).unwrap_or(""))
    });

    Ok(models)
}

//! Import and export of markdown documents.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted by import.
pub const IMPORT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Unsupported file type: .{0} (expected .md, .markdown or .txt)")]
    UnsupportedExtension(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file as UTF-8 text. The caller replaces the document
/// wholesale with the returned content; nothing is merged.
pub fn import_file(path: &Path) -> Result<String, IoError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if !IMPORT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IoError::UnsupportedExtension(extension));
    }

    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(IoError::Io)
}

/// Suggested export file name: `<prefix>-<ISO date>.md`.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{date}.md")
}

/// Write the document text verbatim to `path`.
pub fn export_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}
